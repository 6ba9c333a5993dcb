//! Ownership and visibility guards for book operations.

use booklog_core::{Book, UserId};

use crate::use_cases::BookUseCaseError;

/// Only the owner may modify or delete a book.
pub fn ensure_owner(book: &Book, caller: UserId) -> Result<(), BookUseCaseError> {
    if book.is_owned_by(caller) {
        Ok(())
    } else {
        Err(BookUseCaseError::AccessDenied)
    }
}

/// Owners always see their books; everyone else only public ones.
pub fn ensure_visible_to(book: &Book, caller: UserId) -> Result<(), BookUseCaseError> {
    if book.is_visible_to(caller) {
        Ok(())
    } else {
        Err(BookUseCaseError::AccessDenied)
    }
}
