pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod search_books_cmd;
pub mod toggle_favorite_cmd;
