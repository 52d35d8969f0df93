//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod store;
mod ui;

pub use auth::{AuthBackend, AuthError, PasswordService, TokenClaims, TokenService};
pub use store::{PostFilter, PostOrder, PostStore};
pub use ui::{ConfirmPrompt, Navigator};
