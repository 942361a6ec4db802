//! Session restore and persistence.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::repositories::UserRepository;
use crate::domain::entities::{AuthToken, TokenResponse};
use crate::domain::errors::ClientError;
use crate::domain::ports::TokenStoragePort;
use crate::domain::session::Session;

/// Where a restored token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// System keyring.
    Keyring,
    /// Command-line flag or environment variable.
    CommandLine,
}

impl TokenSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Keyring => "system keyring",
            Self::CommandLine => "command line / environment",
        }
    }
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Moves tokens between the in-memory [`Session`] and persistent storage.
#[derive(Clone)]
pub struct SessionUseCase {
    session: Session,
    storage: Arc<dyn TokenStoragePort>,
}

impl SessionUseCase {
    /// Creates use case.
    #[must_use]
    pub const fn new(session: Session, storage: Arc<dyn TokenStoragePort>) -> Self {
        Self { session, storage }
    }

    /// Loads a token into the session.
    ///
    /// An explicit command-line token wins over the keyring.
    ///
    /// # Errors
    /// Never fails on keyring errors; those are logged and treated as "no token".
    pub async fn restore(
        &self,
        cli_token: Option<String>,
    ) -> Result<Option<TokenSource>, ClientError> {
        if let Some(token) = cli_token.as_deref().and_then(AuthToken::new) {
            info!(token = %token, "Using token from command line / environment");
            self.session.set_token(Some(token));
            return Ok(Some(TokenSource::CommandLine));
        }

        debug!("Checking keyring for stored token");
        match self.storage.get_token().await {
            Ok(Some(token)) => {
                info!(token = %token, "Using token from system keyring");
                self.session.set_token(Some(token));
                Ok(Some(TokenSource::Keyring))
            }
            Ok(None) => {
                debug!("No token found in any source");
                Ok(None)
            }
            Err(e) => {
                debug!(error = %e, "Failed to check keyring");
                Ok(None)
            }
        }
    }

    /// Commits a freshly issued token to the session and, if `persist`, to storage.
    ///
    /// Returns whether the token was persisted.
    ///
    /// # Errors
    /// Returns `Validation` when the response carries a blank token.
    pub async fn commit(&self, response: &TokenResponse, persist: bool) -> Result<bool, ClientError> {
        let token = response
            .token()
            .ok_or_else(|| ClientError::validation("accessToken", "backend issued an empty token"))?;

        self.session.set_token(Some(token.clone()));

        if !persist {
            debug!("Token persistence disabled, skipping storage");
            return Ok(false);
        }

        match self.storage.store_token(&token).await {
            Ok(()) => {
                info!("Token persisted to secure storage");
                Ok(true)
            }
            Err(e) => {
                error!(error = %e, "Failed to persist token to secure storage");
                Ok(false)
            }
        }
    }

    /// Clears the session and deletes the stored token.
    ///
    /// # Errors
    /// Returns error if the stored token cannot be deleted.
    pub async fn end(&self) -> Result<(), ClientError> {
        self.session.clear();
        self.storage.delete_token().await.map_err(|e| {
            error!(error = %e, "Failed to delete token from secure storage");
            e
        })?;
        info!("Session ended");
        Ok(())
    }

    /// Logs out of the backend, then clears the local session regardless of
    /// the backend's answer.
    ///
    /// # Errors
    /// Returns the backend error if logout was rejected, otherwise the storage
    /// error from [`SessionUseCase::end`].
    pub async fn sign_out(&self, repository: &UserRepository) -> Result<(), ClientError> {
        let remote = repository.logout().await;
        let local = self.end().await;

        if let Err(e) = remote {
            warn!(error = %e, "Backend rejected logout, local session cleared anyway");
            return Err(e);
        }
        local
    }
}
