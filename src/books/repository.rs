pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::isbn::Isbn;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    async fn find_by_isbn(&self, isbn: &Isbn) -> LibraryResult<Option<BookEntity>>;
}
