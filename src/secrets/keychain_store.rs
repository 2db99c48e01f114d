//! secrets::keychain_store
//!
//! OS keychain storage via the `keyring` crate (macOS Keychain, Windows
//! Credential Manager, Secret Service on Linux). Only functional with the
//! `keychain` feature; without it every operation reports the provider as
//! unavailable.

#[cfg(feature = "keychain")]
use keyring::Entry;

use super::traits::{SecretError, SecretStore};

/// Service name under which entries are filed.
pub const KEYCHAIN_SERVICE: &str = "pullr";

/// Keychain-based secret storage.
#[derive(Debug)]
pub struct KeychainSecretStore {
    #[cfg_attr(not(feature = "keychain"), allow(dead_code))]
    service: String,
}

impl KeychainSecretStore {
    /// Create a store using the [`KEYCHAIN_SERVICE`] service name.
    ///
    /// # Errors
    ///
    /// Fails when compiled without the `keychain` feature.
    pub fn new() -> Result<Self, SecretError> {
        Self::with_service(KEYCHAIN_SERVICE)
    }

    /// Create a store under a custom service name.
    pub fn with_service(service: impl Into<String>) -> Result<Self, SecretError> {
        if cfg!(feature = "keychain") {
            Ok(Self {
                service: service.into(),
            })
        } else {
            Err(SecretError::ProviderNotAvailable(
                "keychain support not enabled (compile with --features keychain)".into(),
            ))
        }
    }

    #[cfg(feature = "keychain")]
    fn entry(&self, key: &str) -> Result<Entry, SecretError> {
        Entry::new(&self.service, key)
            .map_err(|e| SecretError::ReadError(format!("cannot open keychain entry: {}", e)))
    }
}

#[cfg(feature = "keychain")]
impl SecretStore for KeychainSecretStore {
    fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(SecretError::ReadError(format!(
                "cannot read from keychain: {}",
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SecretError> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| SecretError::WriteError(format!("cannot write to keychain: {}", e)))
    }
}

#[cfg(not(feature = "keychain"))]
impl SecretStore for KeychainSecretStore {
    fn get(&self, _key: &str) -> Result<Option<String>, SecretError> {
        Err(SecretError::ProviderNotAvailable("keychain".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), SecretError> {
        Err(SecretError::ProviderNotAvailable("keychain".into()))
    }
}


#[cfg(all(test, feature = "keychain"))]
mod tests {
    use super::*;

    // These touch the real system keychain under a per-process service name.
    fn store() -> KeychainSecretStore {
        KeychainSecretStore::with_service(format!("pullr-test-{}", std::process::id())).unwrap()
    }

    #[test]
    fn round_trip() {
        let store = store();
        if store.set("forge.identity", "alice").is_err() {
            // No keychain backend in this environment.
            return;
        }
        assert_eq!(
            store.get("forge.identity").unwrap().as_deref(),
            Some("alice")
        );
        let _ = store.entry("forge.identity").unwrap().delete_credential();
    }
}
