use booklog_core::{AuthenticatedUser, BookId, BookStore, CoverImageStore};

use super::BookUseCaseError;
use crate::{book_access::ensure_owner, cover_images::discard_cover};

pub struct DeleteBookUseCase<'a, B, C>
where
    B: BookStore,
    C: CoverImageStore,
{
    book_store: &'a B,
    cover_store: &'a C,
}

impl<'a, B, C> DeleteBookUseCase<'a, B, C>
where
    B: BookStore,
    C: CoverImageStore,
{
    pub fn new(book_store: &'a B, cover_store: &'a C) -> Self {
        Self {
            book_store,
            cover_store,
        }
    }

    #[tracing::instrument(
        name = "DeleteBookUseCase::execute",
        skip(self),
        fields(caller_id = %caller.id)
    )]
    pub async fn execute(
        &self,
        caller: &AuthenticatedUser,
        book_id: BookId,
    ) -> Result<(), BookUseCaseError> {
        let book = self.book_store.find_by_id(book_id).await?;
        ensure_owner(&book, caller.id)?;

        self.book_store.delete(book.id, caller.id).await?;

        if let Some(path) = &book.cover_image_path {
            discard_cover(self.cover_store, path).await;
        }
        tracing::info!(book_id = %book.id, "Book deleted");
        Ok(())
    }
}
