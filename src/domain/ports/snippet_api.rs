//! Code snippet download port.

use async_trait::async_trait;

use crate::domain::errors::ClientError;

/// Fetches the code files attached to posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnippetApi: Send + Sync {
    /// Downloads the snippet stored at `url` as text.
    async fn fetch_code(&self, url: String) -> Result<String, ClientError>;
}
