//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// `CodeValley` REST adapters.
pub mod codevalley;
/// HTTP client plumbing.
pub mod http;
/// Token storage adapters.
pub mod storage;

pub use codevalley::{RestAuthApi, RestSnippetApi};
pub use config::{AppConfig, CliArgs, ConfigManager, LogLevel};
pub use http::{ClientFactory, HttpConfig, ServiceClient};
pub use storage::{KeyringTokenStorage, MemoryTokenStorage};
