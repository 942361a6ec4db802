//! Domain error types.

mod client_error;
mod secret_error;

pub use client_error::ClientError;
pub use secret_error::SecretError;
