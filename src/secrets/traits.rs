//! secrets::traits
//!
//! Secret storage trait definition.
//!
//! Keys are namespaced strings (e.g. `forge.identity`) stored as-is.
//! Implementations must never log, print, or include secret values in
//! error messages.

use thiserror::Error;

/// Errors from secret storage operations.
///
/// Messages describe the failing operation, never the value involved.
#[derive(Debug, Error)]
pub enum SecretError {
    /// Failed to read from secret storage.
    #[error("failed to read secret: {0}")]
    ReadError(String),

    /// Failed to write to secret storage.
    #[error("failed to write secret: {0}")]
    WriteError(String),

    /// Provider not available or not configured.
    #[error("secret provider not available: {0}")]
    ProviderNotAvailable(String),
}

/// Key-value store for secrets.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait SecretStore: Send + Sync {
    /// Get a secret by key; `Ok(None)` if it is not stored.
    fn get(&self, key: &str) -> Result<Option<String>, SecretError>;

    /// Store a secret, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), SecretError>;
}
