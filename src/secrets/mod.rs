//! secrets
//!
//! Secret storage for forge credentials.
//!
//! # Architecture
//!
//! - [`FileSecretStore`]: `~/.pullr/credentials.toml` (default)
//! - [`KeychainSecretStore`]: OS keychain (requires the `keychain` feature)
//!
//! Secrets are never logged or included in error messages.
//!
//! # Example
//!
//! ```ignore
//! use pullr::secrets::create_store;
//!
//! let store = create_store(config.secrets_provider())?;
//! store.set("forge.identity", "alice@example.com")?;
//! ```

mod file_store;
mod keychain_store;
mod traits;

pub use file_store::FileSecretStore;
pub use keychain_store::{KeychainSecretStore, KEYCHAIN_SERVICE};
pub use traits::{SecretError, SecretStore};

/// The default secret store provider name.
pub const DEFAULT_PROVIDER: &str = "file";

/// Create a secret store by provider name (`"file"` or `"keychain"`).
///
/// # Errors
///
/// - Unknown provider name
/// - `"keychain"` without the `keychain` feature
/// - Home directory not found for the file store
pub fn create_store(provider: &str) -> Result<Box<dyn SecretStore>, SecretError> {
    match provider {
        "file" => Ok(Box::new(FileSecretStore::new()?)),
        "keychain" => Ok(Box::new(KeychainSecretStore::new()?)),
        other => Err(SecretError::ProviderNotAvailable(format!(
            "unknown secret provider: '{}' (valid: file, keychain)",
            other
        ))),
    }
}
