//! Client error types.

use thiserror::Error;

/// Failures raised while talking to the `CodeValley` backend.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ClientError {
    #[error("network error: {message}")]
    Transport { message: String },

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("failed to decode response: {message}")]
    Decode { message: String },

    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("response is missing `{field}`")]
    MissingField { field: String },

    #[error("avatar upload failed with HTTP {status}: {body}")]
    Upload { status: u16, body: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid client configuration: {message}")]
    Configuration { message: String },

    #[error("secure storage error: {0}")]
    Storage(#[from] super::SecretError),
}

impl ClientError {
    /// Creates transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates HTTP status error.
    #[must_use]
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns the HTTP status carried by the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } | Self::Upload { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns whether the request failed before any response arrived.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns whether the backend rejected the session credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 401, .. })
    }
}
