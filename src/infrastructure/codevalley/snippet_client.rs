//! Snippet downloads for post code attachments.

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use crate::domain::errors::ClientError;
use crate::domain::ports::SnippetApi;
use crate::domain::session::Session;
use crate::infrastructure::http::{ClientFactory, ServiceClient};

/// Downloads snippet files with the session's credentials.
pub struct RestSnippetApi {
    client: ServiceClient,
}

impl RestSnippetApi {
    /// Creates adapter.
    #[must_use]
    pub fn new(factory: &ClientFactory, session: &Session) -> Self {
        Self {
            client: factory.authorized(session),
        }
    }
}

#[async_trait]
impl SnippetApi for RestSnippetApi {
    async fn fetch_code(&self, url: String) -> Result<String, ClientError> {
        let url = self.client.resolve(&url)?;
        debug!(%url, "Downloading code snippet");

        let request = self.client.request_url(Method::GET, url);
        self.client.send_text(request).await
    }
}
