//! Access gating for guarded destinations.

use crate::session::SessionState;

/// The login destination; redirects here carry the originally requested
/// location so a successful sign-in can return the user there.
pub const LOGIN_PATH: &str = "/admin/login";

/// The public home destination, for valid-but-underprivileged identities.
pub const HOME_PATH: &str = "/";

/// The admin landing destination, the default post-login target.
pub const ADMIN_PATH: &str = "/admin";

/// The admin post list, where the editor lands after a successful save.
pub const ADMIN_POSTS_PATH: &str = "/admin/posts";

/// Capability level a destination requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    Public,
    RequireAuthenticated,
    RequireAdmin,
}

/// Outcome of evaluating a navigation against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: render a loading placeholder and nothing
    /// else. No redirect is decided yet.
    Pending,
    /// Render the requested content.
    Render,
    /// Redirect elsewhere. `return_to` is set only when the redirect leads
    /// to login and the original location should be recoverable.
    Redirect {
        to: &'static str,
        replace: bool,
        return_to: Option<String>,
    },
}

/// Evaluate a guarded navigation.
///
/// Holds no state of its own: the decision is a pure function of the
/// requested capability, the session state, and the requested location, and
/// it is re-evaluated on every navigation to a guarded destination.
pub fn evaluate(policy: AccessPolicy, session: &SessionState, requested: &str) -> GuardDecision {
    if matches!(policy, AccessPolicy::Public) {
        return GuardDecision::Render;
    }

    match session {
        SessionState::Resolving => GuardDecision::Pending,
        SessionState::Anonymous => GuardDecision::Redirect {
            to: LOGIN_PATH,
            replace: true,
            return_to: Some(requested.to_string()),
        },
        SessionState::Authenticated(identity) => {
            if matches!(policy, AccessPolicy::RequireAdmin) && !identity.is_admin {
                // The identity is valid, merely underprivileged: send it
                // home, not back to login.
                GuardDecision::Redirect {
                    to: HOME_PATH,
                    replace: true,
                    return_to: None,
                }
            } else {
                GuardDecision::Render
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Identity;
    use uuid::Uuid;

    fn identity(is_admin: bool) -> SessionState {
        SessionState::Authenticated(Identity {
            user_id: Uuid::new_v4(),
            email: "author@example.com".to_string(),
            username: Some("author".to_string()),
            is_admin,
        })
    }

    #[test]
    fn test_public_renders_regardless_of_session() {
        for session in [SessionState::Resolving, SessionState::Anonymous, identity(false)] {
            assert_eq!(
                evaluate(AccessPolicy::Public, &session, "/"),
                GuardDecision::Render
            );
        }
    }

    #[test]
    fn test_resolving_suspends() {
        assert_eq!(
            evaluate(AccessPolicy::RequireAdmin, &SessionState::Resolving, "/admin/posts"),
            GuardDecision::Pending
        );
    }

    #[test]
    fn test_anonymous_redirects_to_login_with_return_location() {
        let decision = evaluate(
            AccessPolicy::RequireAdmin,
            &SessionState::Anonymous,
            "/admin/posts/new",
        );
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                to: LOGIN_PATH,
                replace: true,
                return_to: Some("/admin/posts/new".to_string()),
            }
        );
    }

    #[test]
    fn test_non_admin_redirects_home_not_login() {
        let decision = evaluate(AccessPolicy::RequireAdmin, &identity(false), "/admin");
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                to: HOME_PATH,
                replace: true,
                return_to: None,
            }
        );
    }

    #[test]
    fn test_admin_renders_admin_destinations() {
        assert_eq!(
            evaluate(AccessPolicy::RequireAdmin, &identity(true), "/admin"),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_authenticated_suffices_below_admin() {
        assert_eq!(
            evaluate(AccessPolicy::RequireAuthenticated, &identity(false), "/account"),
            GuardDecision::Render
        );
    }
}
