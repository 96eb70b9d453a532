use std::collections::HashSet;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::library::LibraryResult;
use crate::favorites::repository::FavoriteRepository;

// MemoryFavoriteRepository keeps favorite ids for the lifetime of the instance.
// Writers are serialized by the lock; the lock is never held across an await.
#[derive(Debug)]
pub struct MemoryFavoriteRepository {
    favorites: RwLock<HashSet<String>>,
    delay: Duration,
}

impl MemoryFavoriteRepository {
    pub fn new(delay: Duration) -> Self {
        Self {
            favorites: RwLock::new(HashSet::new()),
            delay,
        }
    }

    fn flip(&self, id: &str) -> LibraryResult<bool> {
        let mut favorites = self.favorites.write()?;
        if favorites.remove(id) {
            Ok(false)
        } else {
            favorites.insert(id.to_string());
            Ok(true)
        }
    }
}

#[async_trait]
impl FavoriteRepository for MemoryFavoriteRepository {
    async fn contains(&self, id: &str) -> LibraryResult<bool> {
        Ok(self.favorites.read()?.contains(id))
    }

    async fn snapshot(&self) -> LibraryResult<HashSet<String>> {
        Ok(self.favorites.read()?.clone())
    }

    async fn toggle(&self, id: &str) -> LibraryResult<bool> {
        // a caller dropping the future here leaves the set untouched
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.flip(id)
    }
}
