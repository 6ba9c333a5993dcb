use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use booklog_core::{CoverImage, CoverImagePath, CoverImageStore, CoverImageStoreError};
use uuid::Uuid;

const FALLBACK_FILE_NAME: &str = "cover";
const MAX_FILE_NAME_CHARS: usize = 100;

/// Stores cover images as files directly under the upload directory.
///
/// Stored names are `{uuid}_{sanitized original name}`, so they are unique
/// and never contain path separators.
#[derive(Debug, Clone)]
pub struct LocalCoverImageStore {
    root: PathBuf,
}

impl LocalCoverImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &CoverImagePath) -> Result<PathBuf, CoverImageStoreError> {
        let name = path.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(CoverImageStoreError::NotFound);
        }
        Ok(self.root.join(name))
    }
}

fn sanitize_file_name(original: Option<&str>) -> String {
    let base = original
        .and_then(|name| name.rsplit(['/', '\\']).next())
        .unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_FILE_NAME_CHARS)
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        cleaned
    }
}

#[async_trait]
impl CoverImageStore for LocalCoverImageStore {
    #[tracing::instrument(name = "Saving cover image", skip_all)]
    async fn save(&self, image: CoverImage) -> Result<CoverImagePath, CoverImageStoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CoverImageStoreError::Io(e.to_string()))?;

        let file_name = format!(
            "{}_{}",
            Uuid::new_v4(),
            sanitize_file_name(image.file_name.as_deref())
        );
        tokio::fs::write(self.root.join(&file_name), &image.bytes)
            .await
            .map_err(|e| CoverImageStoreError::Io(e.to_string()))?;

        tracing::debug!(file_name = %file_name, bytes = image.bytes.len(), "Cover image saved");
        Ok(CoverImagePath::new(file_name))
    }

    #[tracing::instrument(name = "Removing cover image", skip(self))]
    async fn remove(&self, path: &CoverImagePath) -> Result<(), CoverImageStoreError> {
        let full_path = self.resolve(path)?;
        tokio::fs::remove_file(full_path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CoverImageStoreError::NotFound
            } else {
                CoverImageStoreError::Io(e.to_string())
            }
        })
    }
}
