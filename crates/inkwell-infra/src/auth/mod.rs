//! Authentication implementations.

mod jwt;
mod memory;
mod password;

#[cfg(feature = "postgres")]
mod postgres;

pub use jwt::JwtTokenService;
pub use memory::InMemoryAuthBackend;
pub use password::Argon2PasswordService;

#[cfg(feature = "postgres")]
pub use postgres::PostgresAuthBackend;
