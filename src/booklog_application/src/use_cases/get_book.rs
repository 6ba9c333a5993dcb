use booklog_core::{AuthenticatedUser, Book, BookId, BookStore};

use super::BookUseCaseError;
use crate::book_access::ensure_visible_to;

pub struct GetBookUseCase<'a, B>
where
    B: BookStore,
{
    book_store: &'a B,
}

impl<'a, B> GetBookUseCase<'a, B>
where
    B: BookStore,
{
    pub fn new(book_store: &'a B) -> Self {
        Self { book_store }
    }

    #[tracing::instrument(name = "GetBookUseCase::execute", skip(self), fields(caller_id = %caller.id))]
    pub async fn execute(
        &self,
        caller: &AuthenticatedUser,
        book_id: BookId,
    ) -> Result<Book, BookUseCaseError> {
        let book = self.book_store.find_by_id(book_id).await?;
        ensure_visible_to(&book, caller.id)?;
        Ok(book)
    }
}
