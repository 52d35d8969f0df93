//! Post persistence: PostgreSQL store and in-memory fallback.

mod memory;

#[cfg(feature = "postgres")]
mod connections;

#[cfg(feature = "postgres")]
pub mod entity;

#[cfg(feature = "postgres")]
mod postgres;

pub use memory::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use connections::{DatabaseConfig, DatabaseConnection};

#[cfg(feature = "postgres")]
pub use postgres::PostgresPostStore;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
