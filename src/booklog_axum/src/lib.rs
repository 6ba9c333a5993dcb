//! Axum integration for the booklog backend.
//!
//! Wraps axum's request type for the framework-agnostic access gate, runs the
//! gate as middleware, and exposes route handlers that call the application
//! use cases and map their errors to JSON responses.
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, middleware, routing::post};
//! use booklog_axum::{access_gate, routes};
//!
//! let app = Router::new()
//!     .route("/api/auth/login", post(routes::login::<U, H, T>))
//!     .with_state((user_store, hasher, token_service.clone()))
//!     .layer(middleware::from_fn_with_state(token_service, access_gate::<T>));
//! ```

pub mod adapters;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

// Re-export for convenience
pub use adapters::AxumRequest;
pub use error::{ApiError, ErrorResponse, MessageResponse};
pub use extractors::CurrentUser;
pub use middleware::access_gate;
