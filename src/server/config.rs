use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    pub upload_dir: String,
    pub bind_addr: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required; the rest fall back to
    /// sensible defaults for local development.
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_expiry_hours = match std::env::var("JWT_EXPIRY_HOURS") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("JWT_EXPIRY_HOURS".to_string()))?,
            Err(_) => DEFAULT_JWT_EXPIRY_HOURS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            jwt_expiry_hours,
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
