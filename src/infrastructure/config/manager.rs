//! Configuration file loading.

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Failures while locating or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform config directory could be determined.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The default config could not be serialized.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Loads `config.toml` from the platform config directory.
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager rooted at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a manager rooted at `path`.
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads the configuration, writing a default file when none exists.
    ///
    /// A file that fails to parse is left untouched and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !config_path.exists() {
            info!(path = %config_path.display(), "Config file not found, creating default");
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "Failed to parse config file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_dir(dir.path().join("codevalley"));

        let config = manager.load_config(None).unwrap();
        assert_eq!(config, AppConfig::default());

        let written = fs::read_to_string(manager.config_dir().join(CONFIG_FILE_NAME)).unwrap();
        assert!(written.contains("base_url = \"http://localhost:3000\""));
    }

    #[test]
    fn test_load_config_reads_existing_file() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_dir(dir.path().to_path_buf());
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "base_url = \"https://api.codevalley.dev\"\ntimeout_secs = 10\n",
        )
        .unwrap();

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.base_url, "https://api.codevalley.dev");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_load_config_handles_malformed_file() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "base_url = [").unwrap();

        let config = manager.load_config(None).unwrap();
        assert_eq!(config, AppConfig::default());
        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "base_url = [");
    }

    #[test]
    fn test_path_override() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "log_level = \"warn\"\n").unwrap();

        let config = manager.load_config(Some(&custom)).unwrap();
        assert_eq!(config.log_level, super::super::LogLevel::Warn);
        assert!(!manager.config_dir().exists());
    }
}
