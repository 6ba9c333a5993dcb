use booklog_core::{BookStoreError, CoverImageStoreError, UserStoreError};
use thiserror::Error;

pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod login;
pub mod signup;
pub mod update_book;

/// Error shared by the book use cases.
#[derive(Debug, Error)]
pub enum BookUseCaseError {
    #[error("Book not found")]
    NotFound,
    #[error("Access denied")]
    AccessDenied,
    #[error("Book store error: {0}")]
    BookStore(BookStoreError),
    #[error("Cover image error: {0}")]
    CoverImage(#[from] CoverImageStoreError),
    #[error("User store error: {0}")]
    UserStore(#[from] UserStoreError),
}

impl From<BookStoreError> for BookUseCaseError {
    fn from(error: BookStoreError) -> Self {
        match error {
            BookStoreError::BookNotFound => Self::NotFound,
            other => Self::BookStore(other),
        }
    }
}
