pub mod add_book_cmd;
pub mod borrow_book_cmd;
pub mod find_book_cmd;
pub mod list_books_cmd;
pub mod return_book_cmd;
