use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use crate::books::domain::{fold, Book};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity is one catalog record. Records are created whole by the add
// operation, stamped with the date they were added, and never edited.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read_status: bool,
    // catalogs written before the stamp existed carry no date_added
    #[serde(default, skip_serializing_if = "Option::is_none", with = "serializer")]
    pub date_added: Option<NaiveDate>,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: i32, genre: &str, read_status: bool) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            year,
            genre: genre.trim().to_string(),
            read_status,
            date_added: Some(Local::now().date_naive()),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        fold(self.title.as_str())
    }
}

impl Book for BookEntity {
    fn is_read(&self) -> bool {
        self.read_status
    }

    fn matches(&self, folded_query: &str) -> bool {
        fold(self.title.as_str()).contains(folded_query) ||
            fold(self.author.as_str()).contains(folded_query)
    }
}
