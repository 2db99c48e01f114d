//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Example
//!
//! ```toml
//! [forge]
//! host = "github.example.com"
//!
//! [secrets]
//! provider = "file"
//!
//! [error_translations]
//! base = "Target branch doesn't exist on the forge. Push it first."
//! head = "Source branch doesn't exist on the forge. Push it first."
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Forge location
    pub forge: Option<ForgeConfig>,

    /// Secret storage settings
    pub secrets: Option<SecretsConfig>,

    /// Extra or replacement translations for forge error reasons
    pub error_translations: Option<BTreeMap<String, String>>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(forge) = &self.forge {
            forge.validate()?;
        }

        if let Some(secrets) = &self.secrets {
            secrets.validate()?;
        }

        if let Some(translations) = &self.error_translations {
            if let Some((reason, _)) = translations.iter().find(|(_, text)| text.is_empty()) {
                return Err(ConfigError::InvalidValue(format!(
                    "error translation for '{}' cannot be empty",
                    reason
                )));
            }
        }

        Ok(())
    }
}

/// Forge location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ForgeConfig {
    /// Forge host name; `github.com` maps to `https://api.github.com`, any
    /// other host to `https://<host>/api/v3`
    pub host: Option<String>,

    /// Full API base URL, overriding `host`
    pub api_base: Option<String>,
}

impl ForgeConfig {
    /// Validate the forge configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(host) = &self.host {
            if host.is_empty() || host.contains('/') {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid forge host '{}', expected a bare host name",
                    host
                )));
            }
        }

        if let Some(api_base) = &self.api_base {
            if !(api_base.starts_with("https://") || api_base.starts_with("http://")) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid forge api_base '{}', expected an http(s) URL",
                    api_base
                )));
            }
        }

        Ok(())
    }
}

/// Secrets configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SecretsConfig {
    /// Provider to use ("file" or "keychain")
    pub provider: Option<String>,
}

impl SecretsConfig {
    /// Valid secret providers.
    pub const VALID_PROVIDERS: &'static [&'static str] = &["file", "keychain"];

    /// Validate the secrets configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(provider) = &self.provider {
            if !Self::VALID_PROVIDERS.contains(&provider.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid secrets provider '{}', must be one of: {}",
                    provider,
                    Self::VALID_PROVIDERS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_valid() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config, GlobalConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn full_config_parses() {
        let config: GlobalConfig = toml::from_str(
            r#"
            [forge]
            host = "github.example.com"

            [secrets]
            provider = "keychain"

            [error_translations]
            head = "push your branch"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.forge.as_ref().unwrap().host.as_deref(),
            Some("github.example.com")
        );
        assert_eq!(
            config.secrets.as_ref().unwrap().provider.as_deref(),
            Some("keychain")
        );
        assert_eq!(
            config.error_translations.as_ref().unwrap().get("head"),
            Some(&"push your branch".to_string())
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<GlobalConfig, _> = toml::from_str("trunk = \"main\"");
        assert!(result.is_err());
    }

    #[test]
    fn host_with_path_is_invalid() {
        let config = GlobalConfig {
            forge: Some(ForgeConfig {
                host: Some("github.example.com/api".to_string()),
                api_base: None,
            }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn api_base_must_be_url() {
        let forge = ForgeConfig {
            host: None,
            api_base: Some("github.example.com".to_string()),
        };
        assert!(forge.validate().is_err());
    }

    #[test]
    fn invalid_secrets_provider() {
        let secrets = SecretsConfig {
            provider: Some("vault".to_string()),
        };
        let err = secrets.validate().unwrap_err();
        assert!(err.to_string().contains("vault"));
    }

    #[test]
    fn empty_translation_is_invalid() {
        let mut translations = BTreeMap::new();
        translations.insert("base".to_string(), String::new());
        let config = GlobalConfig {
            error_translations: Some(translations),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
