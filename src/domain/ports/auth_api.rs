//! `/auth` service port definition.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::entities::{
    AvatarFile, AvatarUploadResponse, LoginRequest, RegisterRequest, TokenResponse, TwoFactorCode,
    User,
};
use crate::domain::errors::ClientError;

/// Remote operations exposed under `/auth`.
///
/// `login` and `register` are sent without credentials; every other call carries
/// the session's bearer token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `GET /auth/me`
    async fn me(&self) -> Result<User, ClientError>;

    /// `GET /auth/profile/{id}`
    async fn profile(&self, id: u64) -> Result<User, ClientError>;

    /// `POST /auth/avatar` as multipart `userId` + `file`.
    async fn upload_avatar(
        &self,
        user_id: u64,
        file: AvatarFile,
    ) -> Result<AvatarUploadResponse, ClientError>;

    /// `POST /auth/2fa/turn-on`
    async fn turn_on_two_factor(&self) -> Result<(), ClientError>;

    /// `POST /auth/2fa/turn-off`
    async fn turn_off_two_factor(&self) -> Result<(), ClientError>;

    /// `POST /auth/2fa/authenticate`
    async fn authenticate_two_factor(
        &self,
        body: TwoFactorCode,
    ) -> Result<TokenResponse, ClientError>;

    /// `POST /auth/2fa/generate`
    async fn generate_two_factor(&self) -> Result<HashMap<String, String>, ClientError>;

    /// `POST /auth/login`
    async fn login(&self, body: LoginRequest) -> Result<TokenResponse, ClientError>;

    /// `POST /auth/register`
    async fn register(&self, body: RegisterRequest) -> Result<TokenResponse, ClientError>;

    /// `GET /auth/search/{username}`
    async fn search_users(&self, username: String) -> Result<Vec<User>, ClientError>;

    /// `POST /auth/logout`
    async fn logout(&self) -> Result<(), ClientError>;
}
