pub mod memory_favorite_repository;

use std::collections::HashSet;
use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait FavoriteRepository: Sync + Send {
    // true if the id is currently a favorite
    async fn contains(&self, id: &str) -> LibraryResult<bool>;

    // copy of the favorite ids, used to decorate a batch of books consistently
    async fn snapshot(&self) -> LibraryResult<HashSet<String>>;

    // flips membership of the id and returns the new state
    async fn toggle(&self, id: &str) -> LibraryResult<bool>;
}
