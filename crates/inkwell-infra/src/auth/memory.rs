//! In-memory auth backend - used when the database is not configured, and
//! as a fixture in development.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use inkwell_core::domain::{Profile, User};
use inkwell_core::ports::{AuthBackend, AuthError, PasswordService};

/// Auth backend holding at most one account, entirely in memory.
///
/// The empty variant rejects every credential pair; it exists so the server
/// can start without a database and still answer sign-in requests sanely.
pub struct InMemoryAuthBackend {
    account: Option<(User, Profile)>,
    passwords: Arc<dyn PasswordService>,
}

impl InMemoryAuthBackend {
    pub fn empty(passwords: Arc<dyn PasswordService>) -> Self {
        Self {
            account: None,
            passwords,
        }
    }

    /// A single admin account with the given email and password hash.
    pub fn single_admin(
        email: &str,
        password_hash: &str,
        username: &str,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        let user = User::new(email.to_string(), password_hash.to_string());
        let profile = Profile {
            user_id: user.id,
            username: username.to_string(),
            is_admin: true,
        };
        Self {
            account: Some((user, profile)),
            passwords,
        }
    }
}

#[async_trait]
impl AuthBackend for InMemoryAuthBackend {
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let Some((user, _)) = &self.account else {
            tracing::warn!("Auth backend not configured - rejecting sign-in");
            return Err(AuthError::InvalidCredentials);
        };

        if user.email != email {
            return Err(AuthError::InvalidCredentials);
        }

        if !self.passwords.verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user.clone())
    }

    async fn profile_for(&self, user_id: Uuid) -> Result<Option<Profile>, AuthError> {
        Ok(self
            .account
            .as_ref()
            .filter(|(user, _)| user.id == user_id)
            .map(|(_, profile)| profile.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Argon2PasswordService;

    fn backend_with(password: &str) -> InMemoryAuthBackend {
        let passwords = Arc::new(Argon2PasswordService::new());
        let hash = passwords.hash(password).unwrap();
        InMemoryAuthBackend::single_admin("author@example.com", &hash, "author", passwords)
    }

    #[tokio::test]
    async fn test_verifies_known_account() {
        let backend = backend_with("secret");
        let user = backend
            .verify_credentials("author@example.com", "secret")
            .await
            .unwrap();

        let profile = backend.profile_for(user.id).await.unwrap().unwrap();
        assert!(profile.is_admin);
    }

    #[tokio::test]
    async fn test_rejects_wrong_password() {
        let backend = backend_with("secret");
        let err = backend
            .verify_credentials("author@example.com", "nope")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_empty_backend_rejects_everything() {
        let backend = InMemoryAuthBackend::empty(Arc::new(Argon2PasswordService::new()));
        let err = backend
            .verify_credentials("anyone@example.com", "anything")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(backend.profile_for(Uuid::new_v4()).await.unwrap().is_none());
    }
}
