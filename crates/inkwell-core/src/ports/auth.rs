//! Authentication and authorization ports.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Profile, User};

/// Credential verification and profile lookup port.
///
/// The session layer drives this: verify on sign-in, then resolve the admin
/// capability with a profile lookup keyed by the verified user's id.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Verify an email/password pair, returning the matching user.
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Look up the profile for a user id. `None` when no profile row exists.
    async fn profile_for(&self, user_id: Uuid) -> Result<Option<Profile>, AuthError>;

    /// Invalidate any backend-held session state. Best-effort; sign-out
    /// succeeds locally regardless.
    async fn sign_out(&self) {}
}

/// Claims stored in JWT tokens.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub email: String,
    pub roles: Vec<String>,
    pub exp: i64,
}

/// Token service trait for JWT operations.
#[async_trait]
pub trait TokenService: Send + Sync {
    /// Generate access token for a user.
    fn generate_token(
        &self,
        user_id: Uuid,
        email: &str,
        roles: Vec<String>,
    ) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime of freshly issued tokens, in seconds.
    fn expiration_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Auth backend failure: {0}")]
    Backend(String),
}
