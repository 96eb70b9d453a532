use std::sync::Arc;

use async_trait::async_trait;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::seed::validate_catalog;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository serves a catalog that is fixed at construction
#[derive(Debug, Clone)]
pub struct MemoryBookRepository {
    books: Arc<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new(books: Vec<BookEntity>) -> LibraryResult<Self> {
        validate_catalog(&books)?;
        Ok(Self {
            books: Arc::new(books),
        })
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(LibraryError::book_not_found)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.as_ref().clone())
    }

    async fn exists(&self, id: &str) -> LibraryResult<bool> {
        Ok(self.books.iter().any(|b| b.id == id))
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_title_or_author(&self, query: &str) -> LibraryResult<Vec<BookEntity>> {
        let needle = query.to_lowercase();
        Ok(self.books.iter()
            .filter(|b| b.matches(needle.as_str()))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::books::seed::seed_books;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    fn build_repo() -> MemoryBookRepository {
        MemoryBookRepository::new(seed_books().expect("should seed")).expect("should build repo")
    }

    #[tokio::test]
    async fn test_should_get_books() {
        let books_repo = build_repo();
        let loaded = books_repo.get("3").await.expect("should return book");
        assert_eq!("Atomic Habits", loaded.title.as_str());
        assert!(books_repo.exists("3").await.expect("should check"));
    }

    #[tokio::test]
    async fn test_should_not_get_missing_books() {
        let books_repo = build_repo();
        let loaded = books_repo.get("42").await;
        assert_eq!(Err(LibraryError::book_not_found()), loaded);
        assert!(!books_repo.exists("42").await.expect("should check"));
    }

    #[tokio::test]
    async fn test_should_find_all_in_order() {
        let books_repo = build_repo();
        let res = books_repo.find_all().await.expect("should return books");
        assert_eq!(10, res.len());
        assert_eq!("1", res[0].id.as_str());
        assert_eq!("10", res[9].id.as_str());
    }

    #[tokio::test]
    async fn test_should_find_by_title_or_author() {
        let books_repo = build_repo();
        let res = books_repo.find_by_title_or_author("SAPIENS").await.expect("should return books");
        assert_eq!(1, res.len());
        assert_eq!("Sapiens", res[0].title.as_str());

        let res = books_repo.find_by_title_or_author("weir").await.expect("should return books");
        assert_eq!(1, res.len());
        assert_eq!("Project Hail Mary", res[0].title.as_str());

        let res = books_repo.find_by_title_or_author("the").await.expect("should return books");
        let ids: Vec<&str> = res.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(vec!["1", "4", "6", "8", "9"], ids);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_catalog() {
        let res = MemoryBookRepository::new(vec![BookEntity::new("1", "a", "b"), BookEntity::new("1", "c", "d")]);
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        let empty = MemoryBookRepository::new(vec![]).expect("should build empty repo");
        assert!(empty.find_all().await.expect("should return books").is_empty());
    }
}
