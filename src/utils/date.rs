pub const DATE_FMT: &str = "%Y-%m-%d";

// Serializes the optional date_added stamp as a plain YYYY-MM-DD string so
// catalogs written without the stamp still round-trip.
pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => date.format(DATE_FMT).to_string().serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        let date = NaiveDate::parse_from_str(str_date.as_str(), DATE_FMT).map_err(D::Error::custom)?;
        Ok(Some(date))
    }
}
