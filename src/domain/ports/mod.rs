mod auth_api;
mod authenticator;
mod snippet_api;
mod token_storage_port;

pub use auth_api::AuthApi;
pub use authenticator::Authenticator;
pub use snippet_api::SnippetApi;
pub use token_storage_port::TokenStoragePort;
