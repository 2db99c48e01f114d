//! engine::error
//!
//! The closed error taxonomy of the engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::auth::CredentialError;
use crate::core::remotes::RemoteParseError;
use crate::forge::TransportError;
use crate::git::GitError;

/// Errors that abort a workflow before it produces an
/// [`Outcome`](super::Outcome).
///
/// Messages never carry credentials.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The remote listing could not be parsed.
    #[error("cannot parse remote listing: {0}")]
    Parse(#[from] RemoteParseError),

    /// The working directory is not inside a repository.
    #[error("not a git repository: {}", path.display())]
    NotARepository {
        /// The directory that was searched
        path: PathBuf,
    },

    /// A remote name has no fetch entry in the registry.
    #[error("Unknown remote {0}.")]
    UnknownRemote(String),

    /// Source and target remotes point at differently named repositories.
    #[error("From repo ({from_repo}) does not match into repo ({into_repo}).")]
    RepoMismatch {
        from_repo: String,
        into_repo: String,
    },

    /// Neither a new pull request nor a login was requested.
    #[error("Missing required options.")]
    MissingOptions,

    /// Credentials could not be obtained.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The forge could not be reached.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The forge answered with a non-success status.
    #[error("forge returned HTTP {status}: {reason}")]
    Api { status: u16, reason: String },

    /// Any other repository failure.
    #[error(transparent)]
    Git(GitError),
}

impl From<GitError> for EngineError {
    fn from(err: GitError) -> Self {
        match err {
            GitError::NotARepo { path } => EngineError::NotARepository { path },
            other => EngineError::Git(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages() {
        assert_eq!(
            EngineError::UnknownRemote("upstream".into()).to_string(),
            "Unknown remote upstream."
        );
        assert_eq!(
            EngineError::RepoMismatch {
                from_repo: "widget".into(),
                into_repo: "gadget".into(),
            }
            .to_string(),
            "From repo (widget) does not match into repo (gadget)."
        );
        assert_eq!(
            EngineError::MissingOptions.to_string(),
            "Missing required options."
        );
    }

    #[test]
    fn not_a_repo_is_lifted() {
        let err: EngineError = GitError::NotARepo {
            path: PathBuf::from("/tmp"),
        }
        .into();
        assert!(matches!(err, EngineError::NotARepository { .. }));

        let err: EngineError = GitError::RefNotFound {
            refname: "nope".into(),
        }
        .into();
        assert!(matches!(err, EngineError::Git(_)));
    }
}
