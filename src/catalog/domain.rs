pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, StatsDto};
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, title: &str) -> LibraryResult<BookDto>;
    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn get_stats(&self) -> LibraryResult<StatsDto>;
}
