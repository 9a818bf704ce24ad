use crate::error::{config::ConfigError, AppError};

const DEFAULT_ADMIN_EMAIL: &str = "admin@admin.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_PORT: u16 = 10000;

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub admin_jwt_secret: String,

    pub admin_email: String,
    pub admin_password: String,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            admin_jwt_secret: std::env::var("ADMIN_JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_JWT_SECRET".to_string()))?,
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }
}
