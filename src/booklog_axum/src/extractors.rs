use axum::{extract::FromRequestParts, http::request::Parts};
use booklog_core::AuthenticatedUser;

use crate::error::ApiError;

/// The caller identity attached by the access gate middleware.
///
/// Rejects with 401 when the request did not pass through the gate as an
/// authenticated request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or(ApiError::Unauthenticated)
    }
}
