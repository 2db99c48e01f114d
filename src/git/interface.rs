//! git::interface
//!
//! The [`Git`] doorway over a `git2::Repository`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Requested ref or revision does not exist.
    #[error("ref not found: {refname}")]
    RefNotFound {
        /// The ref that was not found
        refname: String,
    },

    /// Internal git2 error, or a blocking task that did not complete.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound | git2::ErrorCode::InvalidSpec => GitError::RefNotFound {
                refname: context.to_string(),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// Read-only access to a local repository.
///
/// # Example
///
/// ```ignore
/// use pullr::git::Git;
/// use std::path::Path;
///
/// let git = Git::open(Path::new("./src"))?;  // works from a subdirectory
/// let branch = git.current_branch()?;
/// let listing = git.remote_listing()?;
/// ```
pub struct Git {
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open the repository containing `path`.
    ///
    /// Uses `git2::Repository::discover`, so `path` can be any directory
    /// within the repository.
    ///
    /// # Errors
    ///
    /// [`GitError::NotARepo`] if no repository is found.
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;
        Ok(Self { repo })
    }

    /// Render the configured remotes in `git remote -v` form.
    ///
    /// Each remote contributes a `(fetch)` line with its URL and a `(push)`
    /// line with its push URL (falling back to the URL), tab separated:
    ///
    /// ```text
    /// origin\thttps://forge/acme/widget.git (fetch)
    /// origin\thttps://forge/acme/widget.git (push)
    /// ```
    ///
    /// Remotes without any URL are skipped.
    pub fn remote_listing(&self) -> Result<String, GitError> {
        let names = self.repo.remotes()?;
        let mut listing = String::new();

        for name in names.iter().flatten() {
            let remote = self
                .repo
                .find_remote(name)
                .map_err(|e| GitError::from_git2(e, name))?;
            let Some(url) = remote.url() else { continue };
            let push_url = remote.pushurl().unwrap_or(url);

            // Writing into a String cannot fail.
            let _ = writeln!(listing, "{}\t{} (fetch)", name, url);
            let _ = writeln!(listing, "{}\t{} (push)", name, push_url);
        }

        Ok(listing)
    }

    /// Name of the checked-out branch.
    ///
    /// A detached HEAD yields `"HEAD"`; an unborn branch yields the name HEAD
    /// points at.
    pub fn current_branch(&self) -> Result<String, GitError> {
        let head = match self.repo.head() {
            Ok(h) => h,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                let target = head.symbolic_target().unwrap_or("HEAD");
                return Ok(target.trim_start_matches("refs/heads/").trim().to_string());
            }
            Err(e) => return Err(e.into()),
        };

        if head.is_branch() {
            if let Some(name) = head.shorthand() {
                return Ok(name.trim().to_string());
            }
        }

        Ok("HEAD".to_string())
    }

    /// Trimmed subject line of the newest commit reachable from `reference`.
    ///
    /// An empty `reference` means `HEAD`.
    ///
    /// # Errors
    ///
    /// [`GitError::RefNotFound`] if the revision does not resolve to a commit.
    pub fn last_commit_subject(&self, reference: &str) -> Result<String, GitError> {
        let spec = if reference.trim().is_empty() {
            "HEAD"
        } else {
            reference.trim()
        };

        let commit = self
            .repo
            .revparse_single(spec)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| GitError::from_git2(e, spec))?;

        Ok(commit.summary().unwrap_or("").trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = GitError::NotARepo {
            path: PathBuf::from("/tmp/nowhere"),
        };
        assert_eq!(err.to_string(), "not a git repository: /tmp/nowhere");

        let err = GitError::RefNotFound {
            refname: "feature".to_string(),
        };
        assert!(err.to_string().contains("feature"));
    }

    #[test]
    fn not_found_maps_to_ref_not_found() {
        let err = GitError::from_git2(
            git2::Error::new(
                git2::ErrorCode::NotFound,
                git2::ErrorClass::Reference,
                "no such ref",
            ),
            "feature",
        );
        assert!(matches!(err, GitError::RefNotFound { refname } if refname == "feature"));
    }

    #[test]
    fn other_codes_map_to_internal() {
        let err = GitError::from_git2(
            git2::Error::new(
                git2::ErrorCode::Locked,
                git2::ErrorClass::Index,
                "index locked",
            ),
            "HEAD",
        );
        assert!(matches!(err, GitError::Internal { message } if message.contains("index locked")));
    }

    #[test]
    fn open_outside_repository_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        // A fresh temp dir may still sit below a repository on some machines.
        if git2::Repository::discover(temp.path()).is_ok() {
            return;
        }
        assert!(matches!(
            Git::open(temp.path()),
            Err(GitError::NotARepo { .. })
        ));
    }

    #[test]
    fn listing_and_branch_from_fresh_repository() {
        let temp = tempfile::TempDir::new().unwrap();
        let repo = git2::Repository::init(temp.path()).unwrap();
        repo.remote("origin", "git@forge.example:acme/widget.git")
            .unwrap();
        repo.remote("upstream", "https://forge.example/core/widget")
            .unwrap();

        let git = Git::open(temp.path()).unwrap();
        let listing = git.remote_listing().unwrap();
        assert!(listing.contains("origin\tgit@forge.example:acme/widget.git (fetch)\n"));
        assert!(listing.contains("origin\tgit@forge.example:acme/widget.git (push)\n"));
        assert!(listing.contains("upstream\thttps://forge.example/core/widget (fetch)\n"));

        // Unborn branch: name comes from HEAD's symbolic target.
        let branch = git.current_branch().unwrap();
        assert!(!branch.is_empty());
        assert_ne!(branch, "HEAD");
    }
}
