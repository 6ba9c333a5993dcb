//! Axum route handlers.
//!
//! Handlers extract request data, call the application use cases and convert
//! their results to JSON responses.

pub mod book_form;
pub mod books;
pub mod login;
pub mod register;

pub use books::{create_book, delete_book, get_book, list_books, update_book};
pub use login::{LoginResponse, login};
pub use register::register;
