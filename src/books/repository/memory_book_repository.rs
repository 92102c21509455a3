use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::isbn::Isbn;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in a plain vector so that every lookup is a linear scan in
// insertion order. The lock is only there because repositories are shared by `&self`.
#[derive(Debug)]
pub struct MemoryBookRepository {
    table_name: String,
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            books: RwLock::new(vec![]),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.isbn == entity.isbn) {
            return Err(LibraryError::duplicate_isbn(
                format!("{} already has a book with isbn", self.table_name).as_str(), entity.isbn.as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let existing = books.iter_mut().find(|b| b.isbn == entity.isbn).ok_or_else(|| {
            LibraryError::not_found(format!("book not found for {}", entity.isbn).as_str())
        })?;
        if existing.version != entity.version {
            return Err(LibraryError::runtime(
                format!("stale book {} version {} expected {}",
                        entity.isbn, entity.version, existing.version).as_str(), Some("409".to_string())));
        }
        existing.title = entity.title.to_string();
        existing.author = entity.author.to_string();
        existing.available = entity.available;
        existing.version = entity.version + 1;
        existing.updated_at = Utc::now().naive_utc();
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        books.iter().find(|b| b.isbn == id).cloned().ok_or_else(|| {
            LibraryError::not_found(format!("book not found for {}", id).as_str())
        })
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }

    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.books.read().await.len())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_isbn(&self, isbn: &Isbn) -> LibraryResult<Option<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.isbn == isbn.as_str()).cloned())
    }
}
