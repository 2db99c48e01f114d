//! auth
//!
//! Forge credentials: the identity/secret pair sent as HTTP basic auth.
//!
//! # Components
//!
//! - [`Credentials`] - the pair itself, with a `Debug` that hides the secret
//! - [`CredentialSource`] - async seam the engine obtains credentials through
//! - [`StoredCredentials`] - persisted in a [`SecretStore`](crate::secrets::SecretStore),
//!   prompted for when missing or when a refresh is forced
//! - [`CredentialPrompt`] / [`TerminalPrompt`] - interactive entry
//!
//! # Security
//!
//! The secret never appears in logs, error messages, or debug output.
//!
//! # Example
//!
//! ```ignore
//! use pullr::auth::{CredentialSource, StoredCredentials, TerminalPrompt};
//! use std::sync::Arc;
//!
//! let store = pullr::secrets::create_store("file")?;
//! let source = StoredCredentials::new(Arc::from(store), Arc::new(TerminalPrompt::new(true)));
//! let creds = source.get_credentials(false).await?;
//! ```

mod credentials;
mod errors;
mod prompt;
mod store;

pub use credentials::Credentials;
pub use errors::CredentialError;
pub use prompt::{CredentialPrompt, TerminalPrompt};
pub use store::{StoredCredentials, IDENTITY_KEY, SECRET_KEY};

/// Supplies forge credentials to the engine.
///
/// # Errors
///
/// - [`CredentialError::Missing`] when nothing is stored and prompting is off
/// - [`CredentialError::Empty`] when the user enters an empty value
/// - [`CredentialError::Store`] when persisting or loading fails
#[async_trait::async_trait]
pub trait CredentialSource: Send + Sync {
    /// Return credentials, prompting anew when `force_refresh` is set or
    /// nothing usable is stored.
    async fn get_credentials(&self, force_refresh: bool) -> Result<Credentials, CredentialError>;
}
