//! Keyring-based token storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::AuthToken;
use crate::domain::errors::{ClientError, SecretError};
use crate::domain::ports::TokenStoragePort;

const KEYRING_SERVICE: &str = "codevalley";
const KEYRING_USER: &str = "access-token";

/// System keyring token storage adapter.
pub struct KeyringTokenStorage {
    service: String,
    user: String,
}

impl KeyringTokenStorage {
    /// Creates storage under the default service name.
    #[must_use]
    pub fn new() -> Self {
        Self::with_names(KEYRING_SERVICE, KEYRING_USER)
    }

    /// Creates storage under a custom service and account, e.g. one per backend.
    #[must_use]
    pub fn with_names(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    fn entry(&self) -> Result<Entry, SecretError> {
        Entry::new(&self.service, &self.user).map_err(|e| SecretError::Entry(e.to_string()))
    }
}

impl Default for KeyringTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStoragePort for KeyringTokenStorage {
    async fn get_token(&self) -> Result<Option<AuthToken>, ClientError> {
        debug!(service = %self.service, "Reading token from keyring");

        match self.entry()?.get_password() {
            Ok(password) => Ok(AuthToken::new(password)),
            Err(keyring::Error::NoEntry) => {
                debug!("No token stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to read token from keyring");
                Err(SecretError::Read(e.to_string()).into())
            }
        }
    }

    async fn store_token(&self, token: &AuthToken) -> Result<(), ClientError> {
        debug!(service = %self.service, token = %token, "Writing token to keyring");

        self.entry()?.set_password(token.as_str()).map_err(|e| {
            warn!(error = %e, "Failed to write token to keyring");
            SecretError::Write(e.to_string())
        })?;
        Ok(())
    }

    async fn delete_token(&self) -> Result<(), ClientError> {
        debug!(service = %self.service, "Removing token from keyring");

        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                warn!(error = %e, "Failed to remove token from keyring");
                Err(SecretError::Remove(e.to_string()).into())
            }
        }
    }
}
