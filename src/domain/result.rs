//! Result type for login and registration.

use super::entities::ApiError;

/// Outcome of an authentication call that never fails with an error value of its own.
///
/// Transport, status and decoding failures are all folded into [`AuthResult::Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum AuthResult<T> {
    /// Backend accepted the request.
    Success(T),
    /// Backend rejected the request or could not be reached.
    Error(ApiError),
}

impl<T> AuthResult<T> {
    /// Returns whether this is a success.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the error, if any.
    pub const fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Success(_) => None,
            Self::Error(err) => Some(err),
        }
    }

    /// Converts into `Option`, discarding the error.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Maps the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AuthResult<U> {
        match self {
            Self::Success(value) => AuthResult::Success(f(value)),
            Self::Error(err) => AuthResult::Error(err),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    /// Returns the carried [`ApiError`] for the error case.
    pub fn into_result(self) -> Result<T, ApiError> {
        self.into()
    }
}

impl<T> From<Result<T, ApiError>> for AuthResult<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Error(err),
        }
    }
}

impl<T> From<AuthResult<T>> for Result<T, ApiError> {
    fn from(result: AuthResult<T>) -> Self {
        match result {
            AuthResult::Success(value) => Ok(value),
            AuthResult::Error(err) => Err(err),
        }
    }
}
