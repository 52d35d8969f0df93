//! The browsing session and its resolved identity.

use std::sync::Arc;

use uuid::Uuid;

use inkwell_core::ports::{AuthBackend, AuthError};

/// A resolved acting user, with or without the admin capability.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub username: Option<String>,
    pub is_admin: bool,
}

/// Session state as read by the route guard and the controllers.
#[derive(Debug, Clone)]
pub enum SessionState {
    /// The initial session check has not completed yet.
    Resolving,
    Anonymous,
    Authenticated(Identity),
}

impl SessionState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

/// Holds the current identity for the lifetime of the browsing session.
///
/// Starts `Resolving`; the host completes the first session check with
/// [`AuthSession::resolve`], and sign-in/sign-out re-resolve from there.
pub struct AuthSession {
    backend: Arc<dyn AuthBackend>,
    state: SessionState,
}

impl AuthSession {
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        Self {
            backend,
            state: SessionState::Resolving,
        }
    }

    /// Current state, synchronously. Never blocks.
    pub fn current(&self) -> &SessionState {
        &self.state
    }

    /// Complete the initial session check with whatever identity the host
    /// recovered from its persisted session, or none.
    pub fn resolve(&mut self, identity: Option<Identity>) {
        self.state = match identity {
            Some(identity) => SessionState::Authenticated(identity),
            None => SessionState::Anonymous,
        };
    }

    /// Verify credentials and resolve the admin capability.
    ///
    /// On success the session becomes `Authenticated`; on failure the error
    /// is returned and the session state is left as it was. No retry here;
    /// the caller decides whether to try again.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let user = self.backend.verify_credentials(email, password).await?;

        // Admin capability comes from the profile row, never from the
        // client. Missing profile, non-admin flag, and lookup failure all
        // resolve to a non-admin identity.
        let (username, is_admin) = match self.backend.profile_for(user.id).await {
            Ok(Some(profile)) => (Some(profile.username), profile.is_admin),
            Ok(None) => (None, false),
            Err(err) => {
                tracing::warn!(user_id = %user.id, error = %err, "profile lookup failed");
                (None, false)
            }
        };

        let identity = Identity {
            user_id: user.id,
            email: user.email,
            username,
            is_admin,
        };

        tracing::info!(user_id = %identity.user_id, is_admin = identity.is_admin, "signed in");
        self.state = SessionState::Authenticated(identity.clone());
        Ok(identity)
    }

    /// Always ends `Anonymous`, regardless of prior state.
    pub async fn sign_out(&mut self) {
        self.backend.sign_out().await;
        self.state = SessionState::Anonymous;
        tracing::info!("signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubAuthBackend;

    #[tokio::test]
    async fn test_sign_in_resolves_admin_from_profile() {
        let backend = StubAuthBackend::admin("author@example.com", "secret");
        let mut session = AuthSession::new(Arc::new(backend));

        let identity = session.sign_in("author@example.com", "secret").await.unwrap();
        assert!(identity.is_admin);
        assert!(matches!(session.current(), SessionState::Authenticated(_)));
    }

    #[tokio::test]
    async fn test_sign_in_without_profile_is_not_admin() {
        let backend = StubAuthBackend::without_profile("author@example.com", "secret");
        let mut session = AuthSession::new(Arc::new(backend));

        let identity = session.sign_in("author@example.com", "secret").await.unwrap();
        assert!(!identity.is_admin);
        assert_eq!(identity.username, None);
    }

    #[tokio::test]
    async fn test_failed_sign_in_leaves_state_unchanged() {
        let backend = StubAuthBackend::admin("author@example.com", "secret");
        let mut session = AuthSession::new(Arc::new(backend));
        session.resolve(None);

        let err = session.sign_in("author@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(matches!(session.current(), SessionState::Anonymous));
    }

    #[tokio::test]
    async fn test_sign_out_always_ends_anonymous() {
        let backend = StubAuthBackend::admin("author@example.com", "secret");
        let mut session = AuthSession::new(Arc::new(backend));

        session.sign_in("author@example.com", "secret").await.unwrap();
        session.sign_out().await;
        assert!(matches!(session.current(), SessionState::Anonymous));

        // Signing out of an already-anonymous session is fine too.
        session.sign_out().await;
        assert!(matches!(session.current(), SessionState::Anonymous));
    }

    #[tokio::test]
    async fn test_resolve_completes_initial_check() {
        let backend = StubAuthBackend::admin("author@example.com", "secret");
        let mut session = AuthSession::new(Arc::new(backend));
        assert!(matches!(session.current(), SessionState::Resolving));

        session.resolve(None);
        assert!(matches!(session.current(), SessionState::Anonymous));
    }
}
