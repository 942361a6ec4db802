//! Structured error body returned by the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend error payload `{message, kind, code}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ErrorBody")]
pub struct ApiError {
    /// Human readable message.
    pub message: String,
    /// Error category; the backend sends it as `kind`, `error`, or both.
    pub kind: String,
    /// Backend or HTTP status code.
    pub code: i32,
}

/// Wire form of [`ApiError`]; `kind` wins over `error` when both are sent.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    kind: Option<String>,
    error: Option<String>,
    code: i32,
}

impl TryFrom<ErrorBody> for ApiError {
    type Error = &'static str;

    fn try_from(body: ErrorBody) -> Result<Self, Self::Error> {
        let kind = body.kind.or(body.error).ok_or("missing field `kind`")?;
        Ok(Self {
            message: body.message,
            kind,
            code: body.code,
        })
    }
}

impl ApiError {
    /// Code used when no HTTP response was received.
    pub const NO_RESPONSE_CODE: i32 = -1;

    /// Kind used for locally built errors.
    pub const GENERIC_KIND: &'static str = "Error";

    /// Creates error.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            kind: kind.into(),
            code,
        }
    }

    /// Creates fallback error with the generic kind.
    #[must_use]
    pub fn generic(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, Self::GENERIC_KIND, code)
    }

    /// Decodes an error body, returning `None` for empty or malformed input.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        if body.trim().is_empty() {
            return None;
        }
        serde_json::from_str(body).ok()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.message, self.kind, self.code)
    }
}

impl std::error::Error for ApiError {}
