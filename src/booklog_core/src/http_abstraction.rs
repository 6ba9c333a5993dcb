//! HTTP request abstraction used by the access gate.
//!
//! The gate decides what to do with a request by looking at its method, path
//! and `Authorization` header. It never needs the body, so the abstraction is
//! a read-only view over those parts that a web framework implements on a
//! newtype wrapper of its own request type.
//!
//! ```ignore
//! // In booklog_axum
//! pub struct AxumRequest<'a>(pub &'a axum::extract::Request);
//!
//! impl booklog_core::AuthRequest for AxumRequest<'_> {
//!     fn header(&self, name: &str) -> Option<&str> {
//!         self.0.headers().get(name)?.to_str().ok()
//!     }
//!     // ... just delegates to inner type
//! }
//! ```

const BEARER_SCHEME: &str = "Bearer";

/// Trait for HTTP requests that can be inspected for authentication.
///
/// Implementations return `&str` references straight from the framework's
/// own data structures.
pub trait AuthRequest {
    /// Get a header value by name.
    ///
    /// Header lookup should be case-insensitive (RFC 9110).
    /// Returns `None` if the header doesn't exist or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get the request path
    fn path(&self) -> &str;

    /// The credential of an `Authorization: Bearer <token>` header.
    ///
    /// The scheme name is matched case-insensitively. Any other scheme, or a
    /// bearer header with an empty credential, yields `None`.
    fn bearer_token(&self) -> Option<&str> {
        let value = self.header("authorization")?.trim();
        let (scheme, token) = value.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            return None;
        }
        let token = token.trim();
        (!token.is_empty()).then_some(token)
    }
}
