use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const MAX_RATING: f32 = 5.0;

// BookEntity is an immutable catalog record; favorite status is never stored on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_url: String,
    pub description: String,
    pub rating: f32,
    pub price: f64,
    pub publication_year: i32,
    pub isbn: String,
}

impl BookEntity {
    pub fn new(id: &str, title: &str, author: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            cover_url: format!("https://picsum.photos/seed/book{}/200/300", id),
            description: String::new(),
            rating: 0.0,
            price: 0.0,
            publication_year: 0,
            isbn: String::new(),
        }
    }

    /// Case-insensitive substring match on title or author. `needle` must
    /// already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.id.trim().is_empty() {
            return Err(LibraryError::validation(
                format!("book {:?} has a blank id", self.title).as_str(), Some("400".to_string())));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(LibraryError::validation(
                format!("book {} has rating {} outside 0.0-{}", self.id, self.rating, MAX_RATING).as_str(),
                Some("400".to_string())));
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(LibraryError::validation(
                format!("book {} has negative price {}", self.id, self.price).as_str(), Some("400".to_string())));
        }
        Ok(())
    }
}
