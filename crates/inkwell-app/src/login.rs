//! The login and sign-out flows around the session.

use inkwell_core::ports::{AuthError, Navigator};

use crate::guard::{ADMIN_PATH, LOGIN_PATH};
use crate::session::AuthSession;

/// Sign in, then return to the location the guard carried to the login
/// form, replacing the login entry in history. Falls back to the admin
/// landing page when nothing was carried.
///
/// On failure the error is returned for the form to display and no
/// navigation happens; the caller decides whether to retry.
pub async fn sign_in_and_return(
    session: &mut AuthSession,
    navigator: &dyn Navigator,
    email: &str,
    password: &str,
    return_to: Option<&str>,
) -> Result<(), AuthError> {
    session.sign_in(email, password).await?;
    navigator.go_to(return_to.unwrap_or(ADMIN_PATH), true);
    Ok(())
}

/// Sign out and land on the login page.
pub async fn sign_out_to_login(session: &mut AuthSession, navigator: &dyn Navigator) {
    session.sign_out().await;
    navigator.go_to(LOGIN_PATH, false);
}
