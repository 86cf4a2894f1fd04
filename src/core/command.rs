use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Persistence {
        message: String,
    },
    Runtime {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        fields: Vec<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Validation { message, fields } => {
                CommandError::Validation { message, fields }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::PersistenceRead { message } => {
                CommandError::Persistence { message }
            }
            LibraryError::PersistenceWrite { message } => {
                CommandError::Persistence { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message } => {
                CommandError::Runtime { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Persistence { message: "test".to_string() };
        let _ = CommandError::Runtime { message: "test".to_string() };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), fields: vec![] };
    }

    #[tokio::test]
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::validation("test", vec![])),
            CommandError::Validation { message: _, fields: _ }));
        assert!(matches!(CommandError::from(LibraryError::not_found("test")),
            CommandError::NotFound { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::persistence_read("test")),
            CommandError::Persistence { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::persistence_write("test")),
            CommandError::Persistence { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")),
            CommandError::Serialization { message: _ }));
        assert!(matches!(CommandError::from(LibraryError::runtime("test")),
            CommandError::Runtime { message: _ }));
    }
}
