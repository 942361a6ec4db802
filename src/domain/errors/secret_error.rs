//! Keyring error types.

use thiserror::Error;

/// Failures of the system keyring holding the session token.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SecretError {
    #[error("failed to open keyring entry: {0}")]
    Entry(String),

    #[error("failed to read token from keyring: {0}")]
    Read(String),

    #[error("failed to write token to keyring: {0}")]
    Write(String),

    #[error("failed to remove token from keyring: {0}")]
    Remove(String),
}
