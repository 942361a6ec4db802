//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use crate::infrastructure::http::HttpConfig;

pub(super) const APP_QUALIFIER: &str = "dev";
pub(super) const APP_ORGANIZATION: &str = "codevalley";
pub(super) const APP_NAME: &str = "codevalley";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Settings read from `config.toml`, overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend root URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` override.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path; logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Keep the session token in the system keyring between runs.
    #[serde(default = "default_true")]
    pub remember_token: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

const fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            log_level: LogLevel::Info,
            log_path: None,
            remember_token: true,
        }
    }
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(base_url) = &args.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if args.no_remember {
            self.remember_token = false;
        }
    }

    /// Returns the HTTP settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        let mut http = HttpConfig::new(&self.base_url)
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(user_agent) = &self.user_agent {
            http.user_agent.clone_from(user_agent);
        }
        http
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
