use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct FindBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FindBookCommandRequest {
    pub(crate) isbn: String,
}

impl FindBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct FindBookCommandResponse {
    pub book: BookDto,
}

impl FindBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<FindBookCommandRequest, FindBookCommandResponse> for FindBookCommand {
    async fn execute(&self, req: FindBookCommandRequest) -> Result<FindBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(FindBookCommandResponse::new)
    }
}
