//! Session context holding the current bearer token.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::entities::AuthToken;

/// Shared handle to the current bearer token.
///
/// Clones share the same slot, so a token committed after login is seen by every
/// client created from any clone.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<AuthToken>>>,
}

impl Session {
    /// Creates unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates session holding `token`.
    #[must_use]
    pub fn with_token(token: AuthToken) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }

    /// Returns a copy of the current token.
    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.token.read().clone()
    }

    /// Replaces the current token.
    pub fn set_token(&self, token: Option<AuthToken>) {
        debug!(authenticated = token.is_some(), "Session token updated");
        *self.token.write() = token;
    }

    /// Drops the current token.
    pub fn clear(&self) {
        self.set_token(None);
    }

    /// Returns whether a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &*self.token.read())
            .finish()
    }
}
