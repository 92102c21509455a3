pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, title: &str, author: &str, raw_isbn: &str) -> LibraryResult<BookDto>;
    async fn find_book_by_isbn(&self, raw_isbn: &str) -> LibraryResult<BookDto>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn count_books(&self) -> LibraryResult<usize>;
    // borrow and return work on a book already resolved by find_book_by_isbn
    async fn borrow_book(&self, book: &mut BookDto) -> LibraryResult<()>;
    async fn return_book(&self, book: &mut BookDto) -> LibraryResult<()>;
}
