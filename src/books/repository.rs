pub mod file_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

// BookRepository is the persistence boundary of the store: one resource
// mirrors the whole in-memory collection, rewritten after every mutation.
#[async_trait]
pub(crate) trait BookRepository: Sync + Send {
    // reads the full collection; a missing resource is an empty catalog,
    // not an error
    async fn load(&self) -> LibraryResult<Vec<BookEntity>>;

    // replaces the stored collection with the given one
    async fn save(&self, books: &[BookEntity]) -> LibraryResult<()>;
}
