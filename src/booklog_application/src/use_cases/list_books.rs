use booklog_core::{AuthenticatedUser, Book, BookQuery, BookStore, Page};

use super::BookUseCaseError;

/// Lists the caller's own books. Other users' books never appear here,
/// public or not.
pub struct ListBooksUseCase<'a, B>
where
    B: BookStore,
{
    book_store: &'a B,
}

impl<'a, B> ListBooksUseCase<'a, B>
where
    B: BookStore,
{
    pub fn new(book_store: &'a B) -> Self {
        Self { book_store }
    }

    #[tracing::instrument(name = "ListBooksUseCase::execute", skip(self), fields(caller_id = %caller.id))]
    pub async fn execute(
        &self,
        caller: &AuthenticatedUser,
        query: BookQuery,
    ) -> Result<Page<Book>, BookUseCaseError> {
        Ok(self.book_store.find_by_owner(caller.id, &query).await?)
    }
}
