use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct BorrowBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl BorrowBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// the book must come from a previous FindBookCommand
#[derive(Debug)]
pub(crate) struct BorrowBookCommandRequest {
    pub(crate) book: BookDto,
}

impl BorrowBookCommandRequest {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct BorrowBookCommandResponse {
    pub book: BookDto,
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        let mut book = req.book;
        self.catalog_service.borrow_book(&mut book).await.map_err(CommandError::from)?;
        Ok(BorrowBookCommandResponse { book })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_borrow_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        let add_cmd = AddBookCommand::new(svc.clone());
        let borrow_cmd = BorrowBookCommand::new(svc);

        let added = add_cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert", "9780441013593")).await.expect("should add book");
        let borrowed = borrow_cmd.execute(BorrowBookCommandRequest::new(added.book)).await.expect("should borrow book");
        assert!(!borrowed.book.available);

        let res = borrow_cmd.execute(BorrowBookCommandRequest::new(borrowed.book)).await;
        match res {
            Err(CommandError::AlreadyBorrowed { title, .. }) => assert_eq!("Dune", title.as_str()),
            other => panic!("unexpected {:?}", other),
        }
    }
}
