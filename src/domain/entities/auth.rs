//! Authentication payloads exchanged with `/auth/*`.

use serde::{Deserialize, Serialize};

use super::AuthToken;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl LoginRequest {
    /// Creates login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Public handle.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl RegisterRequest {
    /// Creates register request.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /auth/2fa/authenticate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorCode {
    /// One-time code from the authenticator app.
    pub code: String,
}

impl TwoFactorCode {
    /// Creates code payload.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Token issued by login, registration and 2FA authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Bearer token.
    pub access_token: String,
    /// Set when the account must still complete two-factor authentication.
    #[serde(default)]
    pub is_two_factor_authentication_enabled: bool,
}

impl TokenResponse {
    /// Creates token response.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            is_two_factor_authentication_enabled: false,
        }
    }

    /// Returns the issued token, if non-blank.
    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        AuthToken::new(&self.access_token)
    }

    /// Returns the session state this response moves the client into.
    #[must_use]
    pub const fn session_state(&self) -> SessionState {
        if self.is_two_factor_authentication_enabled {
            SessionState::PendingTwoFactor
        } else {
            SessionState::Authenticated
        }
    }
}

/// Login flow state, derived from the latest token response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No token.
    #[default]
    Unauthenticated,
    /// Token issued, second factor still required.
    PendingTwoFactor,
    /// Fully authenticated.
    Authenticated,
}

/// Response of `POST /auth/avatar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUploadResponse {
    /// Public URL of the stored avatar.
    pub avatar_url: String,
}

/// Authenticator enrollment data from `POST /auth/2fa/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorSetup {
    /// URL of the QR code to scan.
    pub qr_code_url: String,
    /// Key for manual entry.
    pub setup_key: String,
}

/// In-memory avatar file ready for multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFile {
    /// Part file name.
    pub file_name: String,
    /// Guessed content type, if known.
    pub mime_type: Option<String>,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}
