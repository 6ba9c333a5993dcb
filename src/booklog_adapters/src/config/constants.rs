pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const CONFIG_DIR_ENV_VAR: &str = "BOOKLOG_CONFIG_DIR";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const ENV_PREFIX: &str = "BOOKLOG";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const DEFAULT_CONFIG_DIR: &str = "config";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_UPLOADS_DIR: &str = "uploads";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 86_400;
pub const DEFAULT_PG_MAX_CONNECTIONS: u32 = 5;
