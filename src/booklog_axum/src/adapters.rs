//! Axum adapter for the `AuthRequest` abstraction.
//!
//! The access gate only reads the request, so the wrapper borrows it instead
//! of taking ownership; the middleware keeps the request and forwards it to
//! the next service afterwards.

use axum::extract::Request;
use booklog_core::AuthRequest;

/// Newtype wrapper around a borrowed axum request.
///
/// Lets us implement `booklog_core::AuthRequest` without violating the
/// orphan rule.
#[repr(transparent)]
pub struct AxumRequest<'a>(pub &'a Request);

impl<'a> From<&'a Request> for AxumRequest<'a> {
    fn from(req: &'a Request) -> Self {
        AxumRequest(req)
    }
}

impl AuthRequest for AxumRequest<'_> {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers().get(name)?.to_str().ok()
    }

    fn method(&self) -> &str {
        self.0.method().as_str()
    }

    fn path(&self) -> &str {
        self.0.uri().path()
    }
}
