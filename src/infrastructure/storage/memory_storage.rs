//! Process-local token storage.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::entities::AuthToken;
use crate::domain::errors::ClientError;
use crate::domain::ports::TokenStoragePort;

/// Token storage that lives only as long as the process.
///
/// Used when the token must not outlive the run, e.g. `--no-remember`.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: Mutex<Option<AuthToken>>,
}

impl MemoryTokenStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage already holding `token`.
    #[must_use]
    pub fn with_token(token: AuthToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }
}

#[async_trait]
impl TokenStoragePort for MemoryTokenStorage {
    async fn get_token(&self) -> Result<Option<AuthToken>, ClientError> {
        Ok(self.token.lock().clone())
    }

    async fn store_token(&self, token: &AuthToken) -> Result<(), ClientError> {
        *self.token.lock() = Some(token.clone());
        Ok(())
    }

    async fn delete_token(&self) -> Result<(), ClientError> {
        self.token.lock().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_replace_delete() {
        let storage = MemoryTokenStorage::new();
        assert!(!storage.has_token().await.unwrap());

        storage.store_token(&AuthToken::new("first").unwrap()).await.unwrap();
        storage.store_token(&AuthToken::new("second").unwrap()).await.unwrap();
        assert_eq!(storage.get_token().await.unwrap().unwrap().as_str(), "second");

        storage.delete_token().await.unwrap();
        storage.delete_token().await.unwrap();
        assert_eq!(storage.get_token().await.unwrap(), None);
    }
}
