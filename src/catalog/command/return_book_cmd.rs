use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ReturnBookCommandRequest {
    pub(crate) book: BookDto,
}

impl ReturnBookCommandRequest {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub book: BookDto,
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let mut book = req.book;
        self.catalog_service.return_book(&mut book).await.map_err(CommandError::from)?;
        Ok(ReturnBookCommandResponse { book })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::Memory);
        let add_cmd = AddBookCommand::new(svc.clone());
        let borrow_cmd = BorrowBookCommand::new(svc.clone());
        let return_cmd = ReturnBookCommand::new(svc);

        let added = add_cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert", "9780441013593")).await.expect("should add book");
        let res = return_cmd.execute(ReturnBookCommandRequest::new(added.book.clone())).await;
        assert!(matches!(res, Err(CommandError::AlreadyAvailable { .. })));

        let borrowed = borrow_cmd.execute(BorrowBookCommandRequest::new(added.book)).await.expect("should borrow book");
        let returned = return_cmd.execute(ReturnBookCommandRequest::new(borrowed.book)).await.expect("should return book");
        assert!(returned.book.available);
    }
}
