use async_trait::async_trait;
use crate::core::library::LibraryResult;

// Repository gives read access to a fixed, ordered collection of entities
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // all entities in their seeded order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;

    // true if an entity with the id exists
    async fn exists(&self, id: &str) -> LibraryResult<bool>;
}
