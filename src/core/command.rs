use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    InvalidIsbn {
        message: String,
        input: String,
    },
    DuplicateIsbn {
        message: String,
        isbn: String,
    },
    NotFound {
        message: String,
    },
    AlreadyBorrowed {
        message: String,
        title: String,
    },
    AlreadyAvailable {
        message: String,
        title: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::InvalidIsbn { message, input } => {
                CommandError::InvalidIsbn { message, input }
            }
            LibraryError::DuplicateIsbn { message, isbn } => {
                CommandError::DuplicateIsbn { message, isbn }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::AlreadyBorrowed { message, title } => {
                CommandError::AlreadyBorrowed { message, title }
            }
            LibraryError::AlreadyAvailable { message, title } => {
                CommandError::AlreadyAvailable { message, title }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
