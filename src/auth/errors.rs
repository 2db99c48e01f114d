//! auth::errors
//!
//! Credential error types. Messages never contain the secret.

use thiserror::Error;

use crate::secrets::SecretError;

/// Errors from obtaining credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Nothing stored and prompting is not possible.
    #[error("no stored credentials and prompting is disabled. Run 'pullr --force-login' interactively.")]
    Missing,

    /// The user supplied an empty identity or secret.
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Reading from the terminal failed.
    #[error("failed to read credentials: {0}")]
    Prompt(String),

    /// Error from secret storage.
    #[error("credential store error: {0}")]
    Store(#[from] SecretError),

    /// The background credential task did not complete.
    #[error("credential lookup did not complete: {0}")]
    Interrupted(String),
}
