use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::books::domain::{fold, Book};
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, StatsDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    config: Configuration,
    book_repository: Box<dyn BookRepository>,
    // insertion-ordered collection; the mutex serializes operations so one
    // logical operation runs to completion before the next begins
    books: Mutex<Vec<BookEntity>>,
}

impl CatalogServiceImpl {
    // Loads the stored catalog once, at construction. A missing resource is
    // an empty catalog; an unreadable one has already been moved aside by
    // the repository, so the session starts empty and the failure is logged.
    pub(crate) async fn load(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        let books = match book_repository.load().await {
            Ok(books) => books,
            Err(err) => {
                tracing::warn!("starting with an empty catalog: {}", err);
                Vec::new()
            }
        };
        Self {
            config: config.clone(),
            book_repository,
            books: Mutex::new(books),
        }
    }

    fn validate(&self, book: &BookEntity) -> LibraryResult<()> {
        let mut fields: Vec<String> = Vec::new();
        if book.title.is_empty() {
            fields.push("title".to_string());
        }
        if book.author.is_empty() {
            fields.push("author".to_string());
        }
        if book.genre.is_empty() {
            fields.push("genre".to_string());
        }
        if book.year < self.config.min_year || book.year > self.config.max_year {
            fields.push("year".to_string());
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(LibraryError::validation(
                format!("invalid book fields: {}", fields.join(", ")).as_str(), fields))
        }
    }

    async fn persist(&self, books: &[BookEntity]) -> LibraryResult<()> {
        self.book_repository.save(books).await.map_err(|err| {
            // the mutation is kept: memory stays the source of truth for the
            // rest of the session even though storage is now behind
            tracing::warn!("catalog storage is out of sync: {}", err);
            err
        })
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let entity = BookEntity::new(book.title.as_str(), book.author.as_str(),
                                     book.year, book.genre.as_str(), book.read_status);
        self.validate(&entity)?;
        let dto = BookDto::from(&entity);
        let mut books = self.books.lock().await;
        books.push(entity);
        self.persist(&books).await?;
        Ok(dto)
    }

    async fn remove_book(&self, title: &str) -> LibraryResult<BookDto> {
        let key = fold(title);
        let mut books = self.books.lock().await;
        match books.iter().position(|book| book.id() == key) {
            Some(ndx) => {
                // first match wins; remaining records keep their order
                let removed = books.remove(ndx);
                let dto = BookDto::from(&removed);
                self.persist(&books).await?;
                Ok(dto)
            }
            None => {
                Err(LibraryError::not_found(
                    format!("book '{}' not found in the library", title.trim()).as_str()))
            }
        }
    }

    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        let folded = fold(query);
        let books = self.books.lock().await;
        Ok(books.iter()
            .filter(|book| book.matches(folded.as_str()))
            .map(BookDto::from)
            .collect())
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.books.lock().await;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn get_stats(&self) -> LibraryResult<StatsDto> {
        let books = self.books.lock().await;
        let total_books = books.len();
        let read_books = books.iter().filter(|book| book.is_read()).count();
        let mut genre_distribution: BTreeMap<String, usize> = BTreeMap::new();
        for book in books.iter() {
            *genre_distribution.entry(book.genre.clone()).or_insert(0) += 1;
        }
        Ok(StatsDto {
            total_books,
            read_books,
            unread_books: total_books - read_books,
            genre_distribution,
        })
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            genre: other.genre.to_string(),
            read_status: other.read_status,
            date_added: other.date_added,
        }
    }
}
