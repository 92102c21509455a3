use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::isbn::Isbn;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookEntity abstracts a single book kept in the catalog, it is keyed by its normalized isbn
// so there is exactly one entity per isbn.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub available: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &Isbn, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            available: true,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn is_available(&self) -> bool {
        self.available
    }

    fn status(&self) -> BookStatus {
        BookStatus::from_available(self.available)
    }
}


#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::books::isbn::Isbn;
    use crate::core::domain::Identifiable;
    use crate::core::library::BookStatus;

    #[tokio::test]
    async fn test_should_build_books() {
        let isbn = Isbn::normalize("978-0441013593").expect("should normalize");
        let book = BookEntity::new(&isbn, "Dune", "Frank Herbert");
        assert_eq!("9780441013593", book.isbn.as_str());
        assert_eq!("9780441013593", book.id().as_str());
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Frank Herbert", book.author.as_str());
        assert_eq!(0, book.version());
        assert!(book.is_available());
        assert_eq!(BookStatus::Available, book.status());
    }
}
