//! Domain layer with wire entities, the session token store and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Tagged authentication result.
pub mod result;
/// Session token store.
pub mod session;

pub use entities::{ApiError, AuthToken, TokenResponse, User};
pub use errors::{ClientError, SecretError};
pub use ports::{AuthApi, Authenticator, SnippetApi, TokenStoragePort};
pub use result::AuthResult;
pub use session::Session;
