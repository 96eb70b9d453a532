use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// BookDto is a catalog record decorated with the favorite status at read time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_url: String,
    pub description: String,
    pub rating: f32,
    pub price: f64,
    pub publication_year: i32,
    pub isbn: String,
    pub is_favorite: bool,
}

impl BookDto {
    pub fn decorate(entity: &BookEntity, is_favorite: bool) -> BookDto {
        BookDto {
            id: entity.id.to_string(),
            title: entity.title.to_string(),
            author: entity.author.to_string(),
            cover_url: entity.cover_url.to_string(),
            description: entity.description.to_string(),
            rating: entity.rating,
            price: entity.price,
            publication_year: entity.publication_year,
            isbn: entity.isbn.to_string(),
            is_favorite,
        }
    }
}
