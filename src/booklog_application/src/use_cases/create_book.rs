use booklog_core::{AuthenticatedUser, Book, BookDraft, BookStore, CoverImage, CoverImageStore};

use super::BookUseCaseError;
use crate::cover_images::{discard_cover, store_cover};

/// Creates a book owned by the caller, storing its cover first when one is given.
pub struct CreateBookUseCase<'a, B, C>
where
    B: BookStore,
    C: CoverImageStore,
{
    book_store: &'a B,
    cover_store: &'a C,
}

impl<'a, B, C> CreateBookUseCase<'a, B, C>
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
        name = "CreateBookUseCase::execute",
        skip(self, draft, cover),
        fields(owner_id = %caller.id)
    )]
    pub async fn execute(
        &self,
        caller: &AuthenticatedUser,
        draft: BookDraft,
        cover: Option<CoverImage>,
    ) -> Result<Book, BookUseCaseError> {
        let cover_path = store_cover(self.cover_store, cover).await?;

        match self
            .book_store
            .insert(caller.id, draft, cover_path.clone())
            .await
        {
            Ok(book) => {
                tracing::info!(book_id = %book.id, "Book created");
                Ok(book)
            }
            Err(e) => {
                if let Some(path) = &cover_path {
                    discard_cover(self.cover_store, path).await;
                }
                Err(e.into())
            }
        }
    }
}
