//! Application configuration.

pub mod app_config;
pub mod args;
pub mod manager;

pub use app_config::{AppConfig, LogLevel};
pub use args::{CliArgs, Command, TwoFactorCommand};
pub use manager::{ConfigError, ConfigManager};
