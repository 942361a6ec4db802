//! Shared HTTP plumbing for the `CodeValley` REST API.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::errors::ClientError;
use crate::domain::session::Session;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings shared by every service client.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Backend root, e.g. `https://api.codevalley.dev`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl HttpConfig {
    /// Creates config with default timeout and user agent.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }

    /// Sets request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Builds service clients that share one connection pool.
#[derive(Debug, Clone)]
pub struct ClientFactory {
    client: Client,
    base_url: Url,
}

impl ClientFactory {
    /// Creates factory from config.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &HttpConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClientError::configuration(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::configuration(format!(
                "base URL {:?} cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Returns a client that never sends credentials.
    #[must_use]
    pub fn anonymous(&self) -> ServiceClient {
        ServiceClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            session: None,
        }
    }

    /// Returns a client that attaches the session's bearer token to every request.
    ///
    /// The token is read when each request is built, not here, so a login that
    /// happens after this call is still honored.
    #[must_use]
    pub fn authorized(&self, session: &Session) -> ServiceClient {
        ServiceClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            session: Some(session.clone()),
        }
    }
}

/// Request builder and executor bound to one backend.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: Client,
    base_url: Url,
    session: Option<Session>,
}

impl ServiceClient {
    /// Resolves path segments against the base URL, percent-encoding each one.
    #[must_use]
    pub fn url<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        // `ClientFactory::new` rejects cannot-be-a-base URLs, so this never fails.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Resolves an absolute URL, or one relative to the base URL.
    ///
    /// # Errors
    /// Returns `Validation` when `url` cannot be parsed.
    pub fn resolve(&self, url: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(url)
            .map_err(|e| ClientError::validation("url", format!("{url:?}: {e}")))
    }

    /// Starts a request to `segments`, adding `Authorization` when a token is held.
    pub fn request<I>(&self, method: Method, segments: I) -> RequestBuilder
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.request_url(method, self.url(segments))
    }

    /// Starts a request to an absolute URL.
    ///
    /// `Authorization` is added only when a token is held and `url` shares the
    /// base URL's origin (scheme, host and port).
    pub fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        let token = if url.origin() == self.base_url.origin() {
            self.session.as_ref().and_then(Session::token)
        } else {
            if self.session.is_some() {
                debug!(
                    host = url.host_str().unwrap_or_default(),
                    "Foreign origin, sending without credentials"
                );
            }
            None
        };

        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.header(header::AUTHORIZATION, token.bearer()),
            None => builder,
        }
    }

    /// Sends request and fails on non-2xx status.
    ///
    /// # Errors
    /// Returns `Transport` when no response arrives and `HttpStatus` with the
    /// response body for non-success statuses.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Request did not reach the backend");
            if e.is_timeout() {
                ClientError::transport("request timed out")
            } else if e.is_connect() {
                ClientError::transport(format!("failed to connect to backend: {e}"))
            } else {
                ClientError::transport(e.to_string())
            }
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Response received");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Backend returned an error status");
        Err(ClientError::http_status(status.as_u16(), body))
    }

    /// Sends request and decodes a JSON body.
    ///
    /// # Errors
    /// Returns the errors of [`ServiceClient::send`], or `Decode` when the body
    /// does not match `T`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(builder).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::transport(format!("failed to read response body: {e}")))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(error = %e, "Failed to parse response");
            ClientError::decode(e.to_string())
        })
    }

    /// Sends request and discards the body.
    ///
    /// # Errors
    /// Returns the errors of [`ServiceClient::send`].
    pub async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        self.send(builder).await.map(drop)
    }

    /// Sends request and returns the body as text.
    ///
    /// # Errors
    /// Returns the errors of [`ServiceClient::send`].
    pub async fn send_text(&self, builder: RequestBuilder) -> Result<String, ClientError> {
        self.send(builder)
            .await?
            .text()
            .await
            .map_err(|e| ClientError::transport(format!("failed to read response body: {e}")))
    }
}
