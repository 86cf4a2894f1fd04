use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) title: String,
}

impl RemoveBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub book: BookDto,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.title.as_str()).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
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
    async fn test_should_run_remove_book() {
        let add_cmd = AddBookCommand::new(SUT_SVC.get().await.clone());
        let remove_cmd = RemoveBookCommand::new(SUT_SVC.get().await.clone());

        let _ = add_cmd.execute(AddBookCommandRequest::new(
            "A Wizard of Earthsea", "Ursula K. Le Guin", 1968, "Fantasy", true))
            .await.expect("should add book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new("a wizard of earthsea"))
            .await.expect("should remove book");
        assert_eq!("A Wizard of Earthsea", res.book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_removing_missing_book() {
        let remove_cmd = RemoveBookCommand::new(SUT_SVC.get().await.clone());

        let err = remove_cmd.execute(RemoveBookCommandRequest::new("No Such Title"))
            .await.expect_err("should not remove book");
        assert!(matches!(err, CommandError::NotFound { message: _ }));
    }
}
