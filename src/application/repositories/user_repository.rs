//! Account and authentication repository.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::entities::{
    ApiError, AvatarFile, LoginRequest, RegisterRequest, TokenResponse, TwoFactorCode,
    TwoFactorSetup, User,
};
use crate::domain::errors::ClientError;
use crate::domain::ports::{AuthApi, Authenticator};
use crate::domain::result::AuthResult;

const LOGIN_FAILED: &str = "An unexpected error occured when trying to login to your account";
const REGISTER_FAILED: &str = "An unexpected error occured during the creation of your account";

const QR_CODE_URL_KEY: &str = "qrCodeUrl";
const SETUP_KEY_KEY: &str = "setupKey";

/// User-facing account operations over the `/auth` service.
///
/// `login` and `register` never fail: every failure is folded into
/// [`AuthResult::Error`]. All other operations return [`ClientError`].
#[derive(Clone)]
pub struct UserRepository {
    api: Arc<dyn AuthApi>,
}

impl UserRepository {
    /// Creates repository.
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self { api }
    }

    /// Logs in with credentials. The caller decides whether to commit the token.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<TokenResponse> {
        debug!("Attempting login");
        let result = self.api.login(LoginRequest::new(email, password)).await;
        let result = into_auth_result(result, LOGIN_FAILED);
        log_outcome("login", &result);
        result
    }

    /// Creates an account and returns its first token.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> AuthResult<TokenResponse> {
        debug!(username, "Attempting registration");
        let result = self
            .api
            .register(RegisterRequest::new(username, email, password))
            .await;
        let result = into_auth_result(result, REGISTER_FAILED);
        log_outcome("register", &result);
        result
    }

    /// Uploads the image at `path` as the avatar of `user_id` and returns its URL.
    ///
    /// # Errors
    /// Returns `Io` when the file cannot be read and `Upload` with the HTTP status
    /// and response body when the backend rejects it.
    pub async fn upload_avatar(&self, user_id: u64, path: &Path) -> Result<String, ClientError> {
        let file = read_avatar(path).await?;

        match self.api.upload_avatar(user_id, file).await {
            Ok(response) => {
                info!(user_id, "Avatar uploaded");
                Ok(response.avatar_url)
            }
            Err(ClientError::HttpStatus { status, body }) => {
                warn!(user_id, status, "Avatar upload rejected");
                Err(ClientError::Upload { status, body })
            }
            Err(e) => Err(e),
        }
    }

    /// Enables two-factor authentication.
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn turn_on_two_factor(&self) -> Result<(), ClientError> {
        self.api.turn_on_two_factor().await
    }

    /// Disables two-factor authentication.
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn turn_off_two_factor(&self) -> Result<(), ClientError> {
        self.api.turn_off_two_factor().await
    }

    /// Completes a pending two-factor login.
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn authenticate_two_factor(&self, code: &str) -> Result<TokenResponse, ClientError> {
        self.api
            .authenticate_two_factor(TwoFactorCode::new(code))
            .await
    }

    /// Starts authenticator enrollment.
    ///
    /// # Errors
    /// Propagates the service error, or `MissingField` naming the absent key.
    pub async fn generate_two_factor(&self) -> Result<TwoFactorSetup, ClientError> {
        let mut response = self.api.generate_two_factor().await?;

        let qr_code_url = response
            .remove(QR_CODE_URL_KEY)
            .ok_or_else(|| ClientError::missing_field(QR_CODE_URL_KEY))?;
        let setup_key = response
            .remove(SETUP_KEY_KEY)
            .ok_or_else(|| ClientError::missing_field(SETUP_KEY_KEY))?;

        Ok(TwoFactorSetup {
            qr_code_url,
            setup_key,
        })
    }

    /// Ends the backend session.
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.api.logout().await
    }

    /// Returns the signed-in user.
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn me(&self) -> Result<User, ClientError> {
        self.api.me().await
    }

    /// Returns a user's public profile.
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn profile(&self, id: u64) -> Result<User, ClientError> {
        self.api.profile(id).await
    }

    /// Searches users by handle.
    ///
    /// # Errors
    /// Propagates the service error.
    pub async fn search_users(&self, username: &str) -> Result<Vec<User>, ClientError> {
        self.api.search_users(username.to_string()).await
    }
}

#[async_trait]
impl Authenticator for UserRepository {
    async fn login(&self, email: String, password: String) -> AuthResult<TokenResponse> {
        Self::login(self, &email, &password).await
    }
}

fn into_auth_result(
    result: Result<TokenResponse, ClientError>,
    fallback: &str,
) -> AuthResult<TokenResponse> {
    match result {
        Ok(response) => AuthResult::Success(response),
        Err(ClientError::HttpStatus { status, body }) => AuthResult::Error(
            ApiError::from_body(&body)
                .unwrap_or_else(|| ApiError::generic(fallback, i32::from(status))),
        ),
        Err(e) => AuthResult::Error(ApiError::generic(
            failure_text(&e, fallback),
            ApiError::NO_RESPONSE_CODE,
        )),
    }
}

fn failure_text(error: &ClientError, fallback: &str) -> String {
    let text = match error {
        ClientError::Transport { message } | ClientError::Decode { message } => message.clone(),
        other => other.to_string(),
    };
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

fn log_outcome(operation: &str, result: &AuthResult<TokenResponse>) {
    match result {
        AuthResult::Success(response) => {
            info!(operation, state = ?response.session_state(), "Authentication succeeded");
        }
        AuthResult::Error(err) => {
            warn!(operation, code = err.code, kind = %err.kind, "Authentication failed");
        }
    }
}

async fn read_avatar(path: &Path) -> Result<AvatarFile, ClientError> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = format!("avatar-{}.jpg", chrono::Utc::now().timestamp_millis());

    Ok(AvatarFile {
        file_name,
        mime_type: guess_mime_type(path).map(str::to_string),
        bytes,
    })
}

fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "svg" => "image/svg+xml",
        _ => return None,
    };
    Some(mime)
}
