use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchBooksCommandRequest {
    #[serde(default)]
    pub query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub query: String,
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(query: String, books: Vec<BookDto>) -> Self {
        Self {
            query,
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = self.catalog_service.search_books(req.query.as_str())
            .await.map_err(CommandError::from)?;
        Ok(SearchBooksCommandResponse::new(req.query, books))
    }
}
