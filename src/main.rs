use booklog::{
    Argon2PasswordHasher, BooklogService, ExposeSecret, HashMapBookStore, HashMapUserStore,
    JwtTokenService, LocalCoverImageStore, PostgresBookStore, PostgresUserStore, ServiceOptions,
    adapters::{auth::JwtAuthConfig, config::Settings},
    configure_postgresql,
};
use color_eyre::eyre::{Result, bail};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;
    if settings.auth.jwt.secret.expose_secret().trim().is_empty() {
        bail!("auth.jwt.secret must not be empty; set JWT_SECRET");
    }

    let token_service = JwtTokenService::new(JwtAuthConfig {
        jwt_secret: settings.auth.jwt.secret.clone(),
        token_ttl_in_seconds: settings.auth.jwt.time_to_live,
    });
    let cover_store = LocalCoverImageStore::new(settings.application.uploads_dir.clone());
    let options = ServiceOptions::from(&settings.application);

    let service = match &settings.postgres.url {
        Some(url) => {
            let pg_pool =
                configure_postgresql(url.expose_secret(), settings.postgres.max_connections)
                    .await?;
            BooklogService::new(
                PostgresUserStore::new(pg_pool.clone()),
                PostgresBookStore::new(pg_pool),
                Argon2PasswordHasher,
                token_service,
                cover_store,
                options,
            )
        }
        None => {
            tracing::warn!("No postgres.url configured, data is kept in memory only");
            BooklogService::new(
                HashMapUserStore::new(),
                HashMapBookStore::new(),
                Argon2PasswordHasher,
                token_service,
                cover_store,
                options,
            )
        }
    };

    let listener = tokio::net::TcpListener::bind(settings.application.address()).await?;
    tracing::info!("Starting booklog service...");

    service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
