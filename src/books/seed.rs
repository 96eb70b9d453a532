use std::collections::HashSet;
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};

const SEED_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

pub fn seed_books() -> LibraryResult<Vec<BookEntity>> {
    let books: Vec<BookEntity> = serde_json::from_str(SEED_CATALOG_JSON)?;
    validate_catalog(&books)?;
    Ok(books)
}

pub fn validate_catalog(books: &[BookEntity]) -> LibraryResult<()> {
    let mut ids = HashSet::new();
    for book in books {
        book.validate()?;
        if !ids.insert(book.id.as_str()) {
            return Err(LibraryError::validation(
                format!("duplicate book id {}", book.id).as_str(), Some("409".to_string())));
        }
    }
    Ok(())
}
