use booklog_core::{CoverImage, CoverImagePath, CoverImageStore};

use crate::use_cases::BookUseCaseError;

/// Saves a non-empty upload. An empty or missing upload yields `None`.
pub(crate) async fn store_cover<C>(
    cover_store: &C,
    image: Option<CoverImage>,
) -> Result<Option<CoverImagePath>, BookUseCaseError>
where
    C: CoverImageStore,
{
    match image {
        Some(image) if !image.is_empty() => Ok(Some(cover_store.save(image).await?)),
        _ => Ok(None),
    }
}

/// Removes a cover that is no longer referenced. Failures are logged only.
pub(crate) async fn discard_cover<C>(cover_store: &C, path: &CoverImagePath)
where
    C: CoverImageStore,
{
    if let Err(e) = cover_store.remove(path).await {
        tracing::warn!(path = %path, error = %e, "Failed to remove cover image");
    }
}
