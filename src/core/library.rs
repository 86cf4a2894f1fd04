use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    Validation {
        message: String,
        // names of the offending fields, e.g. ["title", "year"]
        fields: Vec<String>,
    },
    NotFound {
        message: String,
    },
    PersistenceRead {
        message: String,
    },
    PersistenceWrite {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str, fields: Vec<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), fields }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn persistence_read(message: &str) -> LibraryError {
        LibraryError::PersistenceRead { message: message.to_string() }
    }

    pub fn persistence_write(message: &str) -> LibraryError {
        LibraryError::PersistenceWrite { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str) -> LibraryError {
        LibraryError::Runtime { message: message.to_string() }
    }

    // Recoverable errors leave the session usable: the collection is either
    // unchanged (Validation, NotFound), rebuilt empty (PersistenceRead), or
    // ahead of storage (PersistenceWrite).
    pub fn recoverable(&self) -> bool {
        match self {
            LibraryError::Validation { .. } => { true }
            LibraryError::NotFound { .. } => { true }
            LibraryError::PersistenceRead { .. } => { true }
            LibraryError::PersistenceWrite { .. } => { true }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, fields } => {
                write!(f, "{} [{}]", message, fields.join(", "))
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::PersistenceRead { message } => {
                write!(f, "{}", message)
            }
            LibraryError::PersistenceWrite { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", vec!["title".to_string()]),
            LibraryError::Validation{ message: _, fields: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_persistence_read_error() {
        assert!(matches!(LibraryError::persistence_read("test"), LibraryError::PersistenceRead{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_persistence_write_error() {
        assert!(matches!(LibraryError::persistence_write("test"), LibraryError::PersistenceWrite{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test"), LibraryError::Runtime{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_recoverable_error() {
        assert_eq!(true, LibraryError::validation("test", vec![]).recoverable());
        assert_eq!(true, LibraryError::not_found("test").recoverable());
        assert_eq!(true, LibraryError::persistence_read("test").recoverable());
        assert_eq!(true, LibraryError::persistence_write("test").recoverable());
        assert_eq!(false, LibraryError::serialization("test").recoverable());
        assert_eq!(false, LibraryError::runtime("test").recoverable());
    }

    #[tokio::test]
    async fn test_should_format_validation_fields() {
        let err = LibraryError::validation("invalid book fields", vec!["title".to_string(), "year".to_string()]);
        assert_eq!("invalid book fields [title, year]", err.to_string());
    }
}
