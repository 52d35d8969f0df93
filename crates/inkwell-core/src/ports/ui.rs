//! Host UI collaborator ports: navigation and confirmation.

use async_trait::async_trait;

/// Navigation port - the host's routing layer.
///
/// `replace` substitutes the current history entry instead of pushing a new
/// one, the way a post-login redirect should.
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str, replace: bool);
}

/// Yes/no prompt port, consulted before destructive actions.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}
