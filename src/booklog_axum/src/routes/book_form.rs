//! Multipart parsing for book create/update requests.
//!
//! The body carries a `book` part holding the book as JSON and an optional
//! `coverImage` file part.

use axum::extract::Multipart;
use booklog_core::{BookAuthor, BookDraft, BookError, BookTitle, CoverImage};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ApiError;

const BOOK_PART: &str = "book";
const COVER_IMAGE_PART: &str = "coverImage";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookForm {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub read_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub review: Option<String>,
    pub before_thoughts: Option<String>,
    pub after_thoughts: Option<String>,
    pub is_public: Option<bool>,
}

impl BookForm {
    pub fn into_draft(self) -> Result<BookDraft, BookError> {
        let title = BookTitle::parse(self.title.as_deref().unwrap_or_default())?;
        let author = BookAuthor::parse(self.author.as_deref().unwrap_or_default())?;

        Ok(BookDraft {
            title,
            author,
            publisher: self.publisher,
            read_date: self.read_date,
            description: self.description,
            review: self.review,
            before_thoughts: self.before_thoughts,
            after_thoughts: self.after_thoughts,
            is_public: self.is_public.unwrap_or(true),
        })
    }
}

pub struct BookUpload {
    pub draft: BookDraft,
    pub cover: Option<CoverImage>,
}

pub async fn read_book_upload(mut multipart: Multipart) -> Result<BookUpload, ApiError> {
    let mut form: Option<BookForm> = None;
    let mut cover = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(BOOK_PART) => {
                let bytes = field.bytes().await?;
                let parsed = serde_json::from_slice(&bytes)
                    .map_err(|e| ApiError::Validation(format!("Invalid book data: {e}")))?;
                form = Some(parsed);
            }
            Some(COVER_IMAGE_PART) => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                cover = Some(CoverImage {
                    bytes: bytes.to_vec(),
                    file_name,
                });
            }
            other => tracing::debug!(part = ?other, "Ignoring unknown multipart part"),
        }
    }

    let form = form.ok_or_else(|| ApiError::Validation("Missing book part".to_string()))?;

    Ok(BookUpload {
        draft: form.into_draft()?,
        cover,
    })
}
