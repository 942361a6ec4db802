//! Persistence port for the session token.

use async_trait::async_trait;

use crate::domain::entities::AuthToken;
use crate::domain::errors::ClientError;

/// Keeps the access token between runs of the client.
///
/// The [`Session`](crate::domain::Session) is the live copy; a storage only
/// seeds it on start and follows it on login and logout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Returns the stored token, or `None` when nothing was saved.
    async fn get_token(&self) -> Result<Option<AuthToken>, ClientError>;

    /// Replaces the stored token.
    async fn store_token(&self, token: &AuthToken) -> Result<(), ClientError>;

    /// Forgets the stored token. Deleting an absent token succeeds.
    async fn delete_token(&self) -> Result<(), ClientError>;

    /// Returns whether a token is stored.
    async fn has_token(&self) -> Result<bool, ClientError> {
        Ok(self.get_token().await?.is_some())
    }
}
