use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

// Identifiable defines the lookup key shared by persistent objects; for
// catalog records the key is the case-folded title.
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the library manager
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub catalog_path: String,
    pub min_year: i32,
    pub max_year: i32,
}

impl Configuration {
    pub fn new(catalog_path: &str) -> Self {
        Configuration {
            catalog_path: catalog_path.to_string(),
            min_year: 1800,
            max_year: Local::now().year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Local};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("library.json");
        assert_eq!("library.json", config.catalog_path.as_str());
        assert_eq!(1800, config.min_year);
        assert_eq!(Local::now().year(), config.max_year);
    }
}
