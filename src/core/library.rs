use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
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
    // Raised when a borrow is attempted against a book that is already on loan. It is a
    // notice for the caller, nothing was changed in the catalog.
    AlreadyBorrowed {
        message: String,
        title: String,
    },
    // Raised when a return is attempted against a book that was never lent out.
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

impl LibraryError {
    pub fn invalid_isbn(message: &str, input: &str) -> LibraryError {
        LibraryError::InvalidIsbn { message: message.to_string(), input: input.to_string() }
    }

    pub fn duplicate_isbn(message: &str, isbn: &str) -> LibraryError {
        LibraryError::DuplicateIsbn { message: message.to_string(), isbn: isbn.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn already_borrowed(message: &str, title: &str) -> LibraryError {
        LibraryError::AlreadyBorrowed { message: message.to_string(), title: title.to_string() }
    }

    pub fn already_available(message: &str, title: &str) -> LibraryError {
        LibraryError::AlreadyAvailable { message: message.to_string(), title: title.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json encoding {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidIsbn { message, input } => {
                write!(f, "{} {:?}", message, input)
            }
            LibraryError::DuplicateIsbn { message, isbn } => {
                write!(f, "{} {}", message, isbn)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyBorrowed { message, title } => {
                write!(f, "{} {:?}", message, title)
            }
            LibraryError::AlreadyAvailable { message, title } => {
                write!(f, "{} {:?}", message, title)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;


#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum BookStatus {
    Available,
    Borrowed,
}

impl BookStatus {
    pub fn from_available(available: bool) -> Self {
        if available {
            BookStatus::Available
        } else {
            BookStatus::Borrowed
        }
    }
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Borrowed" => BookStatus::Borrowed,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}
