use std::collections::HashMap;
use async_trait::async_trait;
use tracing::debug;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::isbn::Isbn;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // writes the flipped availability back, then replaces the caller's copy with the stored record
    async fn set_available(&self, book: &mut BookDto, available: bool) -> LibraryResult<()> {
        let mut entity = BookEntity::from(&*book);
        entity.available = available;
        self.book_repository.update(&entity).await?;
        let stored = self.book_repository.get(entity.id().as_str()).await?;
        *book = BookDto::from(&stored);
        Ok(())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, title: &str, author: &str, raw_isbn: &str) -> LibraryResult<BookDto> {
        let isbn = Isbn::normalize(raw_isbn)?;
        let book = BookDto::new(&isbn, title, author);
        let event = DomainEvent::added("books", book.id().as_str(), &self.metadata(), &book)?;
        let _ = self.book_repository.create(&BookEntity::from(&book)).await?;
        let _ = self.events_publisher.publish(&event).await?;
        debug!(isbn = book.isbn.as_str(), title = book.title.as_str(), "book added");
        Ok(book)
    }

    async fn find_book_by_isbn(&self, raw_isbn: &str) -> LibraryResult<BookDto> {
        let isbn = Isbn::normalize(raw_isbn)?;
        self.book_repository.find_by_isbn(&isbn).await?
            .map(|b| BookDto::from(&b))
            .ok_or_else(|| LibraryError::not_found(format!("no book with isbn {}", isbn).as_str()))
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn count_books(&self) -> LibraryResult<usize> {
        self.book_repository.count().await
    }

    async fn borrow_book(&self, book: &mut BookDto) -> LibraryResult<()> {
        if !book.is_available() {
            return Err(LibraryError::already_borrowed("book is currently on loan", book.title.as_str()));
        }
        self.set_available(book, false).await?;
        let _ = self.events_publisher.publish(&DomainEvent::borrowed(
            "books", book.id().as_str(), &self.metadata(), &*book)?).await?;
        debug!(isbn = book.isbn.as_str(), version = book.version, "book borrowed");
        Ok(())
    }

    async fn return_book(&self, book: &mut BookDto) -> LibraryResult<()> {
        if book.is_available() {
            return Err(LibraryError::already_available("book was not on loan", book.title.as_str()));
        }
        self.set_available(book, true).await?;
        let _ = self.events_publisher.publish(&DomainEvent::returned(
            "books", book.id().as_str(), &self.metadata(), &*book)?).await?;
        debug!(isbn = book.isbn.as_str(), version = book.version, "book returned");
        Ok(())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            available: other.available,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            available: other.available,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
