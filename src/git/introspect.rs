//! git::introspect
//!
//! Async seam over the [`Git`] doorway.

use std::path::PathBuf;

use async_trait::async_trait;

use super::interface::{Git, GitError};

/// Repository facts the engine gathers concurrently.
#[async_trait]
pub trait RepoIntrospector: Send + Sync {
    /// Remote listing in `git remote -v` form.
    async fn remote_listing(&self) -> Result<String, GitError>;

    /// Trimmed name of the checked-out branch.
    async fn current_branch(&self) -> Result<String, GitError>;

    /// Trimmed subject of the newest commit on `reference` (`HEAD` if empty).
    async fn last_commit_subject(&self, reference: &str) -> Result<String, GitError>;
}

/// A repository on disk, opened afresh for each query on tokio's blocking
/// pool.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    path: PathBuf,
}

impl LocalRepository {
    /// Introspect the repository containing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn with_git<T, F>(&self, f: F) -> Result<T, GitError>
    where
        T: Send + 'static,
        F: FnOnce(&Git) -> Result<T, GitError> + Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let git = Git::open(&path)?;
            f(&git)
        })
        .await
        .map_err(|e| GitError::Internal {
            message: format!("repository task did not complete: {}", e),
        })?
    }
}

#[async_trait]
impl RepoIntrospector for LocalRepository {
    async fn remote_listing(&self) -> Result<String, GitError> {
        self.with_git(|git| git.remote_listing()).await
    }

    async fn current_branch(&self) -> Result<String, GitError> {
        self.with_git(|git| git.current_branch()).await
    }

    async fn last_commit_subject(&self, reference: &str) -> Result<String, GitError> {
        let reference = reference.to_string();
        self.with_git(move |git| git.last_commit_subject(&reference))
            .await
    }
}
