use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let svc = factory::create_catalog_service(
            &Configuration::new("test").with_toggle_delay(Duration::ZERO)).expect("should create service");
        let get_cmd = GetBookCommand::new(svc);

        let loaded = get_cmd.execute(GetBookCommandRequest::new("5".to_string())).await.expect("should get book");
        assert_eq!("Educated", loaded.book.title.as_str());
        assert_eq!("978-0399590504", loaded.book.isbn.as_str());
        assert!(!loaded.book.is_favorite);
    }

    #[tokio::test]
    async fn test_should_fail_get_unknown_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test")).expect("should create service");
        let get_cmd = GetBookCommand::new(svc);
        let res = get_cmd.execute(GetBookCommandRequest::new("404".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
