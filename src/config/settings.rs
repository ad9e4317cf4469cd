use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    MissingVar(&'static str),
}

/// Application settings loaded from the environment
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub bind_addr: String,
    pub jwt_secret: String,
    pub upload_dir: PathBuf,
}

impl AppSettings {
    /// Load settings from environment variables
    ///
    /// `JWT_SECRET` is required; everything else has a development default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://travel_checklist.db?mode=rwc".to_string());

        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let bind_addr = format!("0.0.0.0:{}", port);

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        Ok(Self {
            database_url,
            bind_addr,
            jwt_secret,
            upload_dir,
        })
    }
}
