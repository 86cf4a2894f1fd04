use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: i32,
    pub(crate) genre: String,
    #[serde(default)]
    pub(crate) read_status: bool,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: i32, genre: &str, read_status: bool) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
            read_status,
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.title.as_str(), self.author.as_str(),
                     self.year, self.genre.as_str(), self.read_status)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Arc<dyn CatalogService>> = AsyncOnce::new(async {
                factory::create_catalog_service(&Configuration::new("test-library.json"), RepositoryStore::InMemory).await
            });
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = AddBookCommand::new(SUT_SVC.get().await.clone());

        let res = cmd.execute(AddBookCommandRequest::new(
            "The Left Hand of Darkness", "Ursula K. Le Guin", 1969, "SciFi", true))
            .await.expect("should add book");
        assert_eq!("The Left Hand of Darkness", res.book.title.as_str());
        assert!(res.book.date_added.is_some());
    }

    #[tokio::test]
    async fn test_should_fail_adding_invalid_book() {
        let cmd = AddBookCommand::new(SUT_SVC.get().await.clone());

        let err = cmd.execute(AddBookCommandRequest::new("", "Author", 2000, "Fiction", false))
            .await.expect_err("should reject book");
        assert!(matches!(err, CommandError::Validation { message: _, fields: _ }));
    }
}
