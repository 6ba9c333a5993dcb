pub mod auth_validation;
pub mod authentication;
pub mod config;
pub mod persistence;
pub mod storage;

pub use auth_validation::jwt_token_service::{Claims, JwtAuthConfig, JwtTokenService};
pub use authentication::argon2_password_hasher::Argon2PasswordHasher;
pub use config::{
    ApplicationSettings, AuthSettings, JwtSettings, PostgresSettings, Settings, SettingsError,
};
pub use persistence::{
    hashmap_book_store::HashMapBookStore, hashmap_user_store::HashMapUserStore,
    postgres_book_store::PostgresBookStore, postgres_user_store::PostgresUserStore,
};
pub use storage::local_cover_image_store::LocalCoverImageStore;
