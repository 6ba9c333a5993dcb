use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    book::{Book, BookDraft},
    book_query::BookQuery,
    cover_image::CoverImagePath,
    email::Email,
    ids::{BookId, UserId},
    page::Page,
    user::{NewUser, User},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user. Email uniqueness is enforced here, so two
    /// concurrent registrations for the same address cannot both succeed.
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn find_by_id(&self, id: UserId) -> Result<User, UserStoreError>;
    async fn exists_by_email(&self, email: &Email) -> Result<bool, UserStoreError>;
}

// BookStore port trait and errors
#[derive(Debug, Error)]
pub enum BookStoreError {
    #[error("Book not found")]
    BookNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for BookStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::BookNotFound, Self::BookNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait BookStore: Send + Sync {
    async fn insert(
        &self,
        owner_id: UserId,
        draft: BookDraft,
        cover_image_path: Option<CoverImagePath>,
    ) -> Result<Book, BookStoreError>;

    async fn find_by_id(&self, id: BookId) -> Result<Book, BookStoreError>;

    /// Writes every editable field of `book` and refreshes `updated_at`.
    ///
    /// The write is conditional on `book.owner_id` still owning the row;
    /// a row that no longer matches is reported as `BookNotFound`.
    async fn update(&self, book: Book) -> Result<Book, BookStoreError>;

    /// Deletes the book if it exists and belongs to `owner_id`.
    async fn delete(&self, id: BookId, owner_id: UserId) -> Result<(), BookStoreError>;

    async fn find_by_owner(
        &self,
        owner_id: UserId,
        query: &BookQuery,
    ) -> Result<Page<Book>, BookStoreError>;
}
