use booklog_core::{
    AuthenticatedUser, Book, BookDraft, BookId, BookStore, CoverImage, CoverImageStore,
};

use super::BookUseCaseError;
use crate::{
    book_access::ensure_owner,
    cover_images::{discard_cover, store_cover},
};

/// Replaces the editable fields of a book the caller owns.
///
/// The cover changes only when a new non-empty image is supplied; the old
/// file is removed once the new one is committed.
pub struct UpdateBookUseCase<'a, B, C>
where
    B: BookStore,
    C: CoverImageStore,
{
    book_store: &'a B,
    cover_store: &'a C,
}

impl<'a, B, C> UpdateBookUseCase<'a, B, C>
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
        name = "UpdateBookUseCase::execute",
        skip(self, draft, cover),
        fields(caller_id = %caller.id)
    )]
    pub async fn execute(
        &self,
        caller: &AuthenticatedUser,
        book_id: BookId,
        draft: BookDraft,
        cover: Option<CoverImage>,
    ) -> Result<Book, BookUseCaseError> {
        let mut book = self.book_store.find_by_id(book_id).await?;
        ensure_owner(&book, caller.id)?;

        let new_cover = store_cover(self.cover_store, cover).await?;
        let previous_cover = book.cover_image_path.clone();

        draft.apply_to(&mut book);
        if let Some(path) = &new_cover {
            book.cover_image_path = Some(path.clone());
        }

        match self.book_store.update(book).await {
            Ok(updated) => {
                if let (Some(_), Some(previous)) = (&new_cover, &previous_cover) {
                    discard_cover(self.cover_store, previous).await;
                }
                Ok(updated)
            }
            Err(e) => {
                if let Some(path) = &new_cover {
                    discard_cover(self.cover_store, path).await;
                }
                Err(e.into())
            }
        }
    }
}
