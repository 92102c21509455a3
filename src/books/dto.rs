use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::isbn::Isbn;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookDto is a data transfer object between the Catalog service and the shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
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

impl BookDto {
    pub fn new(isbn: &Isbn, title: &str, author: &str) -> BookDto {
        BookDto {
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

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
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
    use crate::books::dto::BookDto;
    use crate::books::isbn::Isbn;
    use crate::core::library::BookStatus;

    #[tokio::test]
    async fn test_should_build_books() {
        let isbn = Isbn::normalize("9780441013593").expect("should normalize");
        let mut book = BookDto::new(&isbn, "Dune", "Frank Herbert");
        assert_eq!("9780441013593", book.isbn.as_str());
        assert_eq!("Dune", book.title.as_str());
        assert_eq!(BookStatus::Available, book.status());
        book.available = false;
        assert!(!book.is_available());
        assert_eq!(BookStatus::Borrowed, book.status());
    }

    #[tokio::test]
    async fn test_should_serialize_books() {
        let isbn = Isbn::normalize("9780441013593").expect("should normalize");
        let book = BookDto::new(&isbn, "Dune", "Frank Herbert");
        let json = serde_json::to_value(&book).expect("should serialize");
        assert_eq!("9780441013593", json["isbn"]);
        assert_eq!(true, json["available"]);
    }
}
