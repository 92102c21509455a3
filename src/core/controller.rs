use serde::{Deserialize, Serialize};
use crate::books::isbn::ISBN_LENGTH;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: RepositoryStore,
}

impl AppState {
    pub fn new(branch: &str, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(branch),
            store,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum Severity {
    // the request was fine but there was nothing to change
    Notice,
    Rejected,
    Fatal,
}

pub(crate) type ConsoleError = (Severity, String);

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::InvalidIsbn { .. } => {
                (Severity::Rejected, format!("Error: The ISBN must have exactly {} numeric digits.", ISBN_LENGTH))
            }
            CommandError::DuplicateIsbn { isbn, .. } => {
                (Severity::Rejected, format!("Error: A book with ISBN {} already exists in the library.", isbn))
            }
            CommandError::NotFound { .. } => {
                (Severity::Rejected, "There are no books with that ISBN.".to_string())
            }
            CommandError::AlreadyBorrowed { title, .. } => {
                (Severity::Notice, format!("Error: The book '{}' is currently on loan.", title))
            }
            CommandError::AlreadyAvailable { title, .. } => {
                (Severity::Notice, format!("Error: The book '{}' was already available in our system.", title))
            }
            CommandError::Serialization { .. } => {
                (Severity::Fatal, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (Severity::Fatal, format!("{:?}", err))
            }
        }
    }
}
