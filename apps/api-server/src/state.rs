//! Application state - shared across all handlers.
//!
//! This is where the port implementations are chosen and injected: Postgres
//! when a database is configured, in-memory fallbacks otherwise. No ambient
//! globals; everything the handlers touch hangs off this struct.

use std::sync::Arc;

use inkwell_core::ports::{AuthBackend, PasswordService, PostStore, TokenService};
use inkwell_infra::auth::{Argon2PasswordService, InMemoryAuthBackend, JwtTokenService};
use inkwell_infra::database::InMemoryPostStore;

#[cfg(feature = "postgres")]
use inkwell_infra::auth::PostgresAuthBackend;
#[cfg(feature = "postgres")]
use inkwell_infra::database::{DatabaseConfig, DatabaseConnection, PostgresPostStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub auth: Arc<dyn AuthBackend>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());

        #[cfg(feature = "postgres")]
        if let Some(url) = &config.database_url {
            let db_config = DatabaseConfig {
                url: url.clone(),
                max_connections: config.db_max_connections,
                min_connections: config.db_min_connections,
            };

            match DatabaseConnection::init(&db_config).await {
                Ok(db) => {
                    let store: Arc<dyn PostStore> =
                        Arc::new(PostgresPostStore::new(db.conn.clone()));
                    let auth: Arc<dyn AuthBackend> =
                        Arc::new(PostgresAuthBackend::new(db.conn, passwords));
                    tracing::info!("Application state initialized (postgres)");
                    return Self { store, auth, tokens };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory store");

        let store: Arc<dyn PostStore> = Arc::new(InMemoryPostStore::new());
        let auth: Arc<dyn AuthBackend> = match &config.fallback_admin {
            Some(admin) => Arc::new(InMemoryAuthBackend::single_admin(
                &admin.email,
                &admin.password_hash,
                &admin.username,
                passwords,
            )),
            None => Arc::new(InMemoryAuthBackend::empty(passwords)),
        };

        tracing::info!("Application state initialized (in-memory)");

        Self { store, auth, tokens }
    }
}
