pub mod books;
pub mod catalog;
pub mod core;
pub mod favorites;
pub mod gateway;
pub mod utils;
