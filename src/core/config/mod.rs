//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! pullr has a single, optional, user-level configuration file. It is read once
//! at the CLI boundary and handed to the engine as plain values; nothing below
//! the CLI reads the environment.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$PULLR_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/pullr/config.toml`
//! 3. `~/.pullr/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use pullr::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Forge API: {}", config.api_base());
//! println!("Secrets: {}", config.secrets_provider());
//! ```

pub mod schema;

pub use schema::{ForgeConfig, GlobalConfig, SecretsConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::forge::ErrorTranslations;

/// Forge host used when none is configured.
pub const DEFAULT_FORGE_HOST: &str = "github.com";

/// REST API base of the public [`DEFAULT_FORGE_HOST`].
pub const PUBLIC_API_BASE: &str = "https://api.github.com";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
///
/// Accessor methods apply defaults for anything the file leaves out.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the config file (if one was loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file.
    fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("PULLR_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("pullr/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".pullr/config.toml"))
            .filter(|path| path.exists())
    }

    /// Base URL of the forge REST API (without the `/repos` suffix).
    ///
    /// `forge.api_base` wins over `forge.host`; the default host is
    /// [`DEFAULT_FORGE_HOST`], served at [`PUBLIC_API_BASE`]. Any other host is
    /// an enterprise install serving the API under `/api/v3`.
    pub fn api_base(&self) -> String {
        let forge = self.global.forge.as_ref();

        if let Some(api_base) = forge.and_then(|f| f.api_base.as_deref()) {
            return api_base.trim_end_matches('/').to_string();
        }

        let host = forge
            .and_then(|f| f.host.as_deref())
            .unwrap_or(DEFAULT_FORGE_HOST);
        if host.eq_ignore_ascii_case(DEFAULT_FORGE_HOST) {
            return PUBLIC_API_BASE.to_string();
        }
        format!("https://{}/api/v3", host)
    }

    /// Get the secrets provider.
    ///
    /// Defaults to "file" if not configured.
    pub fn secrets_provider(&self) -> &str {
        self.global
            .secrets
            .as_ref()
            .and_then(|s| s.provider.as_deref())
            .unwrap_or("file")
    }

    /// Build the error translation table: built-in entries overlaid with the
    /// `[error_translations]` table.
    pub fn error_translations(&self) -> ErrorTranslations {
        let mut translations = ErrorTranslations::default();
        if let Some(overrides) = &self.global.error_translations {
            for (reason, text) in overrides {
                translations.insert(reason.clone(), text.clone());
            }
        }
        translations
    }

    /// Get the path of the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file() {
        let config = Config::default();

        assert_eq!(config.api_base(), "https://api.github.com");
        assert_eq!(config.secrets_provider(), "file");
        assert!(config.loaded_from().is_none());
        assert_eq!(
            config.error_translations().translate("base"),
            ErrorTranslations::default().translate("base")
        );
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [forge]
            host = "github.example.com"

            [secrets]
            provider = "keychain"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.api_base(), "https://github.example.com/api/v3");
        assert_eq!(config.secrets_provider(), "keychain");
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn public_host_uses_api_subdomain() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[forge]\nhost = \"github.com\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base(), "https://api.github.com");
    }

    #[test]
    fn api_base_overrides_host() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [forge]
            host = "github.example.com"
            api_base = "http://127.0.0.1:8080/api/v3/"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base(), "http://127.0.0.1:8080/api/v3");
    }

    #[test]
    fn translations_overlay_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [error_translations]
            head = "Source branch is not on the forge."
            "#,
        )
        .unwrap();

        let translations = Config::load_from(&path).unwrap().error_translations();

        assert_eq!(translations.translate("head"), "Source branch is not on the forge.");
        assert_eq!(
            translations.translate("base"),
            "Remote branch doesn't exist. Did you push?"
        );
        assert_eq!(translations.translate("title"), "title");
    }

    #[test]
    fn parse_error_names_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[forge\nhost = 1").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn invalid_value_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[secrets]\nprovider = \"vault\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::load_from(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
