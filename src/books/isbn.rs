use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const ISBN_LENGTH: usize = 13;

// only these separators are dropped, any other character must be a digit
const SEPARATORS: [char; 2] = ['-', ' '];

// Isbn is the normalized catalog identifier: exactly 13 ascii digits. It is not checked
// against the ISBN-13 checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct Isbn(String);

impl Isbn {
    pub fn normalize(raw: &str) -> LibraryResult<Isbn> {
        let clean: String = raw.chars().filter(|c| !SEPARATORS.contains(c)).collect();
        if clean.len() != ISBN_LENGTH || !clean.chars().all(|c| c.is_ascii_digit()) {
            return Err(LibraryError::invalid_isbn(
                format!("isbn must have exactly {} numeric digits", ISBN_LENGTH).as_str(), raw));
        }
        Ok(Isbn(clean))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for Isbn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
