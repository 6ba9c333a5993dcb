use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use super::{
    cover_image::CoverImagePath,
    ids::{BookId, UserId},
};

pub const TITLE_MAX_CHARS: usize = 500;
pub const AUTHOR_MAX_CHARS: usize = 255;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("Author is required")]
    MissingAuthor,
    #[error("Author must be at most {max} characters")]
    AuthorTooLong { max: usize },
}

/// A non-blank title, stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn parse(raw: &str) -> Result<Self, BookError> {
        if raw.trim().is_empty() {
            return Err(BookError::MissingTitle);
        }
        if raw.chars().count() > TITLE_MAX_CHARS {
            return Err(BookError::TitleTooLong {
                max: TITLE_MAX_CHARS,
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn parse(raw: &str) -> Result<Self, BookError> {
        if raw.trim().is_empty() {
            return Err(BookError::MissingAuthor);
        }
        if raw.chars().count() > AUTHOR_MAX_CHARS {
            return Err(BookError::AuthorTooLong {
                max: AUTHOR_MAX_CHARS,
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The client-editable part of a book record.
///
/// Everything a caller may set when creating or editing a book lives here and
/// nowhere else. Identity, ownership, timestamps and the cover path are
/// managed by the service and the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: BookTitle,
    pub author: BookAuthor,
    pub publisher: Option<String>,
    pub read_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub review: Option<String>,
    pub before_thoughts: Option<String>,
    pub after_thoughts: Option<String>,
    pub is_public: bool,
}

impl BookDraft {
    pub fn new(title: BookTitle, author: BookAuthor) -> Self {
        Self {
            title,
            author,
            publisher: None,
            read_date: None,
            description: None,
            review: None,
            before_thoughts: None,
            after_thoughts: None,
            is_public: true,
        }
    }

    /// Copies the editable fields onto an existing record.
    pub fn apply_to(self, book: &mut Book) {
        book.title = self.title;
        book.author = self.author;
        book.publisher = self.publisher;
        book.read_date = self.read_date;
        book.description = self.description;
        book.review = self.review;
        book.before_thoughts = self.before_thoughts;
        book.after_thoughts = self.after_thoughts;
        book.is_public = self.is_public;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub owner_id: UserId,
    pub title: BookTitle,
    pub author: BookAuthor,
    pub publisher: Option<String>,
    pub read_date: Option<NaiveDate>,
    pub cover_image_path: Option<CoverImagePath>,
    pub description: Option<String>,
    pub review: Option<String>,
    pub before_thoughts: Option<String>,
    pub after_thoughts: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    pub fn is_visible_to(&self, user_id: UserId) -> bool {
        self.is_public || self.is_owned_by(user_id)
    }
}
