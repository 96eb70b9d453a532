use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ToggleFavoriteCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ToggleFavoriteCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct ToggleFavoriteCommandRequest {
    pub book_id: String,
}

impl ToggleFavoriteCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ToggleFavoriteCommandResponse {
    pub book_id: String,
    pub is_favorite: bool,
}

impl ToggleFavoriteCommandResponse {
    pub fn new(book_id: String, is_favorite: bool) -> Self {
        Self {
            book_id,
            is_favorite,
        }
    }
}

#[async_trait]
impl Command<ToggleFavoriteCommandRequest, ToggleFavoriteCommandResponse> for ToggleFavoriteCommand {
    async fn execute(&self, req: ToggleFavoriteCommandRequest) -> Result<ToggleFavoriteCommandResponse, CommandError> {
        let is_favorite = self.catalog_service.toggle_favorite(req.book_id.as_str())
            .await.map_err(CommandError::from)?;
        Ok(ToggleFavoriteCommandResponse::new(req.book_id, is_favorite))
    }
}
