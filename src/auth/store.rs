//! auth::store
//!
//! Credential source backed by a [`SecretStore`].
//!
//! # Flow
//!
//! 1. Unless a refresh is forced, return the stored pair if both halves exist
//! 2. Otherwise prompt, reject empty answers, persist, and return the new pair
//!
//! Store access and prompting block, so they run on tokio's blocking pool and
//! the async caller only awaits the result.

use std::sync::Arc;

use async_trait::async_trait;

use super::credentials::Credentials;
use super::errors::CredentialError;
use super::prompt::CredentialPrompt;
use super::CredentialSource;
use crate::secrets::SecretStore;

/// Secret key for the forge login.
pub const IDENTITY_KEY: &str = "forge.identity";

/// Secret key for the forge password or token.
pub const SECRET_KEY: &str = "forge.secret";

/// Credentials persisted in a secret store, prompted for when absent.
#[derive(Clone)]
pub struct StoredCredentials {
    store: Arc<dyn SecretStore>,
    prompt: Arc<dyn CredentialPrompt>,
}

impl std::fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredentials").finish_non_exhaustive()
    }
}

impl StoredCredentials {
    /// Create a credential source.
    pub fn new(store: Arc<dyn SecretStore>, prompt: Arc<dyn CredentialPrompt>) -> Self {
        Self { store, prompt }
    }

    /// Synchronous lookup; see the module docs for the flow.
    pub fn resolve(&self, force_refresh: bool) -> Result<Credentials, CredentialError> {
        if !force_refresh {
            if let Some(stored) = self.load()? {
                tracing::debug!(identity = %stored.identity, "using stored credentials");
                return Ok(stored);
            }
        }

        let fresh = self.prompt.prompt()?;
        if fresh.identity.is_empty() {
            return Err(CredentialError::Empty("identity"));
        }
        if fresh.secret.is_empty() {
            return Err(CredentialError::Empty("secret"));
        }

        self.store.set(IDENTITY_KEY, &fresh.identity)?;
        self.store.set(SECRET_KEY, &fresh.secret)?;
        tracing::debug!(identity = %fresh.identity, "stored new credentials");

        Ok(fresh)
    }

    fn load(&self) -> Result<Option<Credentials>, CredentialError> {
        let identity = self.store.get(IDENTITY_KEY)?;
        let secret = self.store.get(SECRET_KEY)?;
        Ok(match (identity, secret) {
            (Some(identity), Some(secret)) if !identity.is_empty() && !secret.is_empty() => {
                Some(Credentials::new(identity, secret))
            }
            _ => None,
        })
    }
}

#[async_trait]
impl CredentialSource for StoredCredentials {
    async fn get_credentials(&self, force_refresh: bool) -> Result<Credentials, CredentialError> {
        let source = self.clone();
        tokio::task::spawn_blocking(move || source.resolve(force_refresh))
            .await
            .map_err(|e| CredentialError::Interrupted(e.to_string()))?
    }
}
