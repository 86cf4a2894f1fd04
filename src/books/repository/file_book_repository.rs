use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use rand::Rng;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};

// FileBookRepository mirrors the catalog to a single JSON file. Saves go
// through a temp file and a rename so a reader never observes a partial
// write; an unparseable file is moved aside before the store falls back to
// an empty catalog, so the next save cannot overwrite it.
#[derive(Debug)]
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    pub(crate) fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn quarantine(&self) {
        let aside = self.path.with_extension("corrupt");
        match fs::rename(&self.path, &aside) {
            Ok(_) => {
                tracing::warn!("moved unreadable catalog aside to {}", aside.display());
            }
            Err(err) => {
                tracing::warn!("failed to move unreadable catalog {} aside: {}", self.path.display(), err);
            }
        }
    }
}

#[async_trait]
impl BookRepository for FileBookRepository {
    async fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(LibraryError::persistence_read(
                    format!("failed to read catalog {}: {}", self.path.display(), err).as_str()));
            }
        };
        match serde_json::from_str(text.as_str()) {
            Ok(books) => Ok(books),
            Err(err) => {
                self.quarantine();
                Err(LibraryError::persistence_read(
                    format!("failed to parse catalog {}: {}", self.path.display(), err).as_str()))
            }
        }
    }

    async fn save(&self, books: &[BookEntity]) -> LibraryResult<()> {
        let json = serde_json::to_string_pretty(books)?;
        let tmp = self.path.with_extension(
            format!("tmp{}", rand::thread_rng().gen_range(0..100_000)));
        fs::write(&tmp, json).map_err(|err| LibraryError::persistence_write(
            format!("failed to write catalog {}: {}", tmp.display(), err).as_str()))?;
        fs::rename(&tmp, &self.path).map_err(|err| {
            let _ = fs::remove_file(&tmp);
            LibraryError::persistence_write(
                format!("failed to replace catalog {}: {}", self.path.display(), err).as_str())
        })
    }
}
