//! `CodeValley` REST service adapters.

mod auth_client;
mod snippet_client;

pub use auth_client::RestAuthApi;
pub use snippet_client::RestSnippetApi;
