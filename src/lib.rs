//! # Booklog - Personal Book Journal Backend
//!
//! Facade crate re-exporting the public API of the booklog components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Book`, `BookDraft`, `Page`, etc.
//! - **Ports**: `UserStore`, `BookStore`, `CoverImageStore`, `TokenService`, `PasswordHasher`
//! - **Use cases**: `SignupUseCase`, `LoginUseCase`, the book use cases and the `AccessGate`
//! - **Adapters**: Postgres and in-memory stores, Argon2 hashing, JWT tokens, settings
//! - **Service**: `BooklogService` - the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use booklog_core::*;
}

pub use booklog_core::{
    AuthenticatedUser, Book, BookDraft, BookId, BookQuery, Email, Nickname, Page, Password, User,
    UserError, UserId,
};

// ============================================================================
// Ports
// ============================================================================

pub use booklog_core::{
    BookStore, BookStoreError, CoverImageStore, CoverImageStoreError, PasswordHasher,
    TokenService, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use booklog_application::*;
}

pub use booklog_application::{
    AccessGate, CreateBookUseCase, DeleteBookUseCase, GetBookUseCase, ListBooksUseCase,
    LoginUseCase, SignupUseCase, UpdateBookUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use booklog_adapters::persistence::*;
    }

    /// Password hashing and token issuance
    pub mod auth {
        pub use booklog_adapters::{
            Argon2PasswordHasher, Claims, JwtAuthConfig, JwtTokenService,
        };
    }

    /// Cover image storage
    pub mod storage {
        pub use booklog_adapters::storage::*;
    }

    /// Configuration
    pub mod config {
        pub use booklog_adapters::config::*;
    }

    /// Axum request adapter, middleware and routes
    pub mod http {
        pub use booklog_axum::*;
    }
}

pub use booklog_adapters::{
    Argon2PasswordHasher, HashMapBookStore, HashMapUserStore, JwtTokenService,
    LocalCoverImageStore, PostgresBookStore, PostgresUserStore,
};

// ============================================================================
// Booklog Service (Main Entry Point)
// ============================================================================

pub use booklog_service::{BooklogService, ServiceOptions, configure_postgresql};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
