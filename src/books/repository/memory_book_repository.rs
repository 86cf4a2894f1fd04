use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;

// MemoryBookRepository is the storage-less adapter: the catalog lives only
// for the session. Wired in for tests and in-memory-only runs.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(Vec::new())
    }

    async fn save(&self, _books: &[BookEntity]) -> LibraryResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;

    #[tokio::test]
    async fn test_should_load_empty_catalog() {
        let repo = MemoryBookRepository::new();
        let books = repo.load().await.expect("should load catalog");
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_accept_save() {
        let repo = MemoryBookRepository::new();
        let books = vec![BookEntity::new("Dune", "Frank Herbert", 1965, "SciFi", true)];
        repo.save(&books).await.expect("should save catalog");
        // the adapter keeps nothing: a reload starts empty
        assert!(repo.load().await.expect("should load catalog").is_empty());
    }
}
