use crate::core::domain::Configuration;
use crate::favorites::repository::FavoriteRepository;
use crate::favorites::repository::memory_favorite_repository::MemoryFavoriteRepository;

pub fn create_favorite_repository(config: &Configuration) -> Box<dyn FavoriteRepository> {
    Box::new(MemoryFavoriteRepository::new(config.toggle_delay()))
}
