use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use super::constants::{self, env};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    pub postgres: PostgresSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub assets_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    /// Token lifetime in seconds.
    pub time_to_live: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    /// Without a URL the service runs on in-memory stores.
    pub url: Option<Secret<String>>,
    pub max_connections: u32,
}

impl Settings {
    /// Loads `.env`, then the config directory's `base.toml` and
    /// `{APP_ENVIRONMENT}.toml`, then `BOOKLOG__*` variables, then the
    /// `JWT_SECRET` and `DATABASE_URL` overrides.
    pub fn load() -> Result<Self, SettingsError> {
        let _ = dotenvy::dotenv();

        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| constants::DEFAULT_ENVIRONMENT.to_string());
        let config_dir = std::env::var(env::CONFIG_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(constants::DEFAULT_CONFIG_DIR));

        Self::load_from(&config_dir, &environment)
    }

    pub fn load_from(config_dir: &Path, environment: &str) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .set_default("application.host", constants::DEFAULT_HOST)?
            .set_default("application.port", constants::DEFAULT_PORT)?
            .set_default("application.assets_dir", constants::DEFAULT_ASSETS_DIR)?
            .set_default("application.uploads_dir", constants::DEFAULT_UPLOADS_DIR)?
            .set_default(
                "application.max_upload_bytes",
                constants::DEFAULT_MAX_UPLOAD_BYTES as u64,
            )?
            .set_default(
                "application.request_timeout_secs",
                constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            )?
            .set_default("auth.jwt.time_to_live", constants::DEFAULT_TOKEN_TTL_SECONDS)?
            .set_default(
                "postgres.max_connections",
                constants::DEFAULT_PG_MAX_CONNECTIONS,
            )?
            .add_source(File::from(config_dir.join("base.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{environment}.toml"))).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("application.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("auth.jwt.secret", std::env::var(env::JWT_SECRET_ENV_VAR).ok())?
            .set_override_option("postgres.url", std::env::var(env::DATABASE_URL_ENV_VAR).ok())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
