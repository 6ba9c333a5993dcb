use sqlx::{PgPool, migrate::MigrateError, postgres::PgPoolOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseSetupError {
    #[error("Failed to create Postgres connection pool: {0}")]
    Pool(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migration(#[from] MigrateError),
}

/// Connects to PostgreSQL and runs all pending migrations.
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Upper bound for the pool
///
/// # Returns
/// A configured PgPool ready for use
pub async fn configure_postgresql(
    url: &str,
    max_connections: u32,
) -> Result<PgPool, DatabaseSetupError> {
    let pg_pool = get_postgres_pool(url, max_connections).await?;

    // Run database migrations
    sqlx::migrate!("../../migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
