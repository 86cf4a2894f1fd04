use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListBooksCommandRequest {}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books().await
            .map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let svc = factory::create_catalog_service(
            &Configuration::new("test-library.json"), RepositoryStore::InMemory).await;
        let add_cmd = AddBookCommand::new(svc.clone());
        let list_cmd = ListBooksCommand::new(svc);

        let _ = add_cmd.execute(AddBookCommandRequest::new(
            "Dune", "Frank Herbert", 1965, "SciFi", true)).await.expect("should add book");
        let _ = add_cmd.execute(AddBookCommandRequest::new(
            "Emma", "Jane Austen", 1815, "Romance", false)).await.expect("should add book");

        let res = list_cmd.execute(ListBooksCommandRequest::new()).await.expect("should list books");
        assert_eq!(2, res.books.len());
        assert_eq!("Dune", res.books[0].title.as_str());
        assert_eq!("Emma", res.books[1].title.as_str());
    }
}
