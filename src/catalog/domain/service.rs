use std::collections::{HashMap, HashSet};
use async_trait::async_trait;
use serde::Serialize;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::favorites::repository::FavoriteRepository;
use crate::gateway::events::EventPublisher;

#[derive(Debug, Serialize)]
struct FavoriteChanged<'a> {
    book_id: &'a str,
    is_favorite: bool,
}

pub(crate) struct CatalogServiceImpl {
    store_name: String,
    strict_favorites: bool,
    book_repository: Box<dyn BookRepository>,
    favorite_repository: Box<dyn FavoriteRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      favorite_repository: Box<dyn FavoriteRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            store_name: config.store_name.to_string(),
            strict_favorites: config.strict_favorites,
            book_repository,
            favorite_repository,
            events_publisher,
        }
    }

    // the flip is already committed, so a lost event is only logged
    async fn publish_favorite_changed(&self, id: &str, is_favorite: bool) {
        let data = FavoriteChanged { book_id: id, is_favorite };
        let metadata = HashMap::from([("store".to_string(), self.store_name.to_string())]);
        let res = match DomainEvent::updated("favorites", "catalog", id, &metadata, &data) {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = res {
            tracing::warn!(store = %self.store_name, book_id = id, is_favorite, error = %err,
                "failed to publish favorite event");
        }
    }

    async fn decorate_all(&self, books: Vec<BookEntity>) -> LibraryResult<Vec<BookDto>> {
        let favorites: HashSet<String> = self.favorite_repository.snapshot().await?;
        Ok(books.iter()
            .map(|b| BookDto::decorate(b, favorites.contains(&b.id)))
            .collect())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        tracing::debug!(store = %self.store_name, count = books.len(), "listing books");
        self.decorate_all(books).await
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        let book = match self.book_repository.get(id).await {
            Ok(book) => book,
            Err(err) => {
                tracing::warn!(store = %self.store_name, book_id = id, error = %err, "book lookup failed");
                return Err(err);
            }
        };
        let is_favorite = self.favorite_repository.contains(id).await?;
        Ok(BookDto::decorate(&book, is_favorite))
    }

    async fn toggle_favorite(&self, id: &str) -> LibraryResult<bool> {
        if self.strict_favorites && !self.book_repository.exists(id).await? {
            tracing::warn!(store = %self.store_name, book_id = id, "rejecting favorite for unknown book");
            return Err(LibraryError::book_not_found());
        }
        let is_favorite = self.favorite_repository.toggle(id).await?;
        tracing::info!(store = %self.store_name, book_id = id, is_favorite, "favorite toggled");
        self.publish_favorite_changed(id, is_favorite).await;
        Ok(is_favorite)
    }

    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        let books = if query.trim().is_empty() {
            self.book_repository.find_all().await?
        } else {
            self.book_repository.find_by_title_or_author(query).await?
        };
        tracing::debug!(store = %self.store_name, query, count = books.len(), "searching books");
        self.decorate_all(books).await
    }

    async fn list_favorites(&self) -> LibraryResult<Vec<BookDto>> {
        let favorites = self.favorite_repository.snapshot().await?;
        let books = self.book_repository.find_all().await?;
        Ok(books.iter()
            .filter(|b| favorites.contains(&b.id))
            .map(|b| BookDto::decorate(b, true))
            .collect())
    }
}
