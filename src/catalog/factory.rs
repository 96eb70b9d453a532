use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::favorites::factory::create_favorite_repository;
use crate::gateway::factory::create_publisher;

pub fn create_catalog_service(config: &Configuration) -> LibraryResult<Arc<dyn CatalogService>> {
    let book_repo = factory::create_book_repository()?;
    let favorite_repo = create_favorite_repository(config);
    let publisher = create_publisher();
    Ok(Arc::new(CatalogServiceImpl::new(config, book_repo, favorite_repo, publisher)))
}
