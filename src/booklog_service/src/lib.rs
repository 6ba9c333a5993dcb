pub mod booklog_service;
pub mod helpers;
pub mod tracing;

pub use booklog_service::{BooklogService, ServiceOptions};
pub use helpers::{DatabaseSetupError, configure_postgresql, get_postgres_pool};
