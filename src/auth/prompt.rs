//! auth::prompt
//!
//! Interactive credential entry.

use std::io::{self, BufRead, Write};

use super::credentials::Credentials;
use super::errors::CredentialError;

/// Source of freshly entered credentials.
pub trait CredentialPrompt: Send + Sync {
    /// Ask for an identity and secret.
    fn prompt(&self) -> Result<Credentials, CredentialError>;
}

/// Prompts on the terminal: identity echoed, secret masked via `rpassword`.
///
/// Prompts are written to stderr so stdout stays clean for results.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    interactive: bool,
}

impl TerminalPrompt {
    /// Create a prompt. With `interactive == false` every prompt fails with
    /// [`CredentialError::Missing`].
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }
}

impl CredentialPrompt for TerminalPrompt {
    fn prompt(&self) -> Result<Credentials, CredentialError> {
        if !self.interactive {
            return Err(CredentialError::Missing);
        }

        let mut stderr = io::stderr();
        write!(stderr, "Forge login (user name or e-mail): ")
            .and_then(|_| stderr.flush())
            .map_err(|e| CredentialError::Prompt(e.to_string()))?;

        let mut identity = String::new();
        io::stdin()
            .lock()
            .read_line(&mut identity)
            .map_err(|e| CredentialError::Prompt(e.to_string()))?;

        let secret = rpassword::prompt_password("Password or access token: ")
            .map_err(|e| CredentialError::Prompt(e.to_string()))?;

        Ok(Credentials::new(identity.trim(), secret))
    }
}
