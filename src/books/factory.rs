use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::books::seed::seed_books;
use crate::core::library::LibraryResult;

pub fn create_book_repository() -> LibraryResult<Box<dyn BookRepository>> {
    create_book_repository_with(seed_books()?)
}

pub fn create_book_repository_with(books: Vec<BookEntity>) -> LibraryResult<Box<dyn BookRepository>> {
    Ok(Box::new(MemoryBookRepository::new(books)?))
}
