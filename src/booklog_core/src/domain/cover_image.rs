use std::fmt;

pub const COVER_IMAGE_URL_PREFIX: &str = "/api/images/";

/// An uploaded cover image that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
}

impl CoverImage {
    /// An upload field with no content counts as "no image".
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Reference to a stored cover image, relative to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoverImagePath(String);

impl CoverImagePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn public_url(&self) -> String {
        format!("{COVER_IMAGE_URL_PREFIX}{}", self.0)
    }
}

impl fmt::Display for CoverImagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
