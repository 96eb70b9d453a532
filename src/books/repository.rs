pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // books whose title or author contains the query, ignoring case, in catalog order
    async fn find_by_title_or_author(&self, query: &str) -> LibraryResult<Vec<BookEntity>>;
}
