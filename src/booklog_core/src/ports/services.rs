use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    cover_image::{CoverImage, CoverImagePath},
    identity::AuthenticatedUser,
    password::{Password, PasswordDigest},
};

#[derive(Debug, Error)]
#[error("Password hashing failed: {0}")]
pub struct PasswordHasherError(pub String);

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError>;

    /// `false` for a wrong password and for a digest that cannot be parsed.
    async fn verify(&self, password: &Password, digest: &PasswordDigest) -> bool;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signature is invalid")]
    InvalidSignature,
    #[error("Token has expired")]
    Expired,
    #[error("Token is malformed")]
    Malformed,
    #[error("Unexpected token error: {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: Secret<String>,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies stateless bearer tokens.
pub trait TokenService: Send + Sync {
    fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken, TokenError>;
    fn verify(&self, token: &str) -> Result<AuthenticatedUser, TokenError>;
}

#[derive(Debug, Error)]
pub enum CoverImageStoreError {
    #[error("Cover image not found")]
    NotFound,
    #[error("Cover image storage failed: {0}")]
    Io(String),
}

#[async_trait]
pub trait CoverImageStore: Send + Sync {
    async fn save(&self, image: CoverImage) -> Result<CoverImagePath, CoverImageStoreError>;
    async fn remove(&self, path: &CoverImagePath) -> Result<(), CoverImageStoreError>;
}
