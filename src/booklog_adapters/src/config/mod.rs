pub mod constants;
pub mod settings;

pub use settings::{
    ApplicationSettings, AuthSettings, JwtSettings, PostgresSettings, Settings, SettingsError,
};
