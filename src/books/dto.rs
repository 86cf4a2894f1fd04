use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::{fold, Book};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is the read-only snapshot of a record handed to presentation
// shells; mutating it never touches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read_status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "serializer")]
    pub date_added: Option<NaiveDate>,
}

impl BookDto {
    pub fn new(title: &str, author: &str, year: i32, genre: &str, read_status: bool) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
            read_status,
            date_added: None, // stamped by the store on add
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        fold(self.title.as_str())
    }
}

impl Book for BookDto {
    fn is_read(&self) -> bool {
        self.read_status
    }

    fn matches(&self, folded_query: &str) -> bool {
        fold(self.title.as_str()).contains(folded_query) ||
            fold(self.author.as_str()).contains(folded_query)
    }
}

// StatsDto summarizes the catalog for the statistics view; genre counts are
// keyed by the exact genre string and iterate in a deterministic order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct StatsDto {
    pub total_books: usize,
    pub read_books: usize,
    pub unread_books: usize,
    pub genre_distribution: BTreeMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("Dune", "Frank Herbert", 1965, "SciFi", true);
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Frank Herbert", book.author.as_str());
        assert_eq!(None, book.date_added);
    }

    #[tokio::test]
    async fn test_should_fold_id() {
        let book = BookDto::new("DUNE", "Frank Herbert", 1965, "SciFi", true);
        assert_eq!("dune", book.id());
    }
}
