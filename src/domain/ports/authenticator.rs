//! Credential login port used by the presentation layer.

use async_trait::async_trait;

use crate::domain::entities::TokenResponse;
use crate::domain::result::AuthResult;

/// Exchanges credentials for a token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Logs in with email and password.
    async fn login(&self, email: String, password: String) -> AuthResult<TokenResponse>;
}
