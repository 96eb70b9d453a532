pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn toggle_favorite(&self, id: &str) -> LibraryResult<bool>;
    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    async fn list_favorites(&self) -> LibraryResult<Vec<BookDto>>;
}
