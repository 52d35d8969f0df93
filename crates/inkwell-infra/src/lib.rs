//! # Inkwell Infrastructure
//!
//! Concrete implementations of the ports defined in `inkwell-core`.
//! This crate contains the database-backed post store and auth backend,
//! their in-memory fallbacks, and the password/token services.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, DatabaseConnection, PostgresPostStore};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, InMemoryAuthBackend, JwtTokenService};

#[cfg(all(feature = "auth", feature = "postgres"))]
pub use auth::PostgresAuthBackend;
