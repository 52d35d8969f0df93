//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub fallback_admin: Option<FallbackAdmin>,
}

/// The single admin account served by the in-memory auth backend when no
/// database is configured. The hash comes pre-computed from the environment;
/// the plain password never does.
#[derive(Debug, Clone)]
pub struct FallbackAdmin {
    pub email: String,
    pub password_hash: String,
    pub username: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let fallback_admin = match (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD_HASH")) {
            (Ok(email), Ok(password_hash)) => Some(FallbackAdmin {
                email,
                password_hash,
                username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            }),
            _ => None,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_url: env::var("DATABASE_URL").ok(),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            db_min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
            fallback_admin,
        }
    }
}
