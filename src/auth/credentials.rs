//! auth::credentials
//!
//! The identity/secret pair used for HTTP basic auth against the forge.

/// Credentials for the forge API.
///
/// `Debug` shows the identity only.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login or e-mail address
    pub identity: String,
    /// Password or personal access token
    pub secret: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("secret", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials::new("alice@example.com", "ghp_topsecret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice@example.com"));
        assert!(debug.contains("[redacted]"));
        assert!(!debug.contains("ghp_topsecret"));
    }
}
