use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;

// AppState hands the same catalog service (and its favorites) to every request
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            catalog_service,
        }
    }
}

pub type ServerError = (StatusCode, String);

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommandError::Serialization { .. } => StatusCode::BAD_REQUEST,
            CommandError::Validation { .. } => StatusCode::BAD_REQUEST,
            CommandError::Runtime { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, err.message().to_string())
    }
}
