//! core::remotes
//!
//! Remote registry parsing.
//!
//! # Design
//!
//! The registry is built from the verbose remote listing (the text `git remote -v`
//! prints), one `name<TAB>url (type)` line per remote and operation type. Only
//! fetch entries are kept; a push-only remote never gets an entry.
//!
//! The name ends at the first whitespace and the type is the last token, so a
//! URL may itself contain spaces (a local path such as `/mnt/My Backups/x.git`).
//!
//! Owner and repository are taken from the last two segments of the URL when it
//! is split on both `:` and `/`, so SSH (`git@host:owner/repo.git`) and HTTPS
//! (`https://host/owner/repo.git`) forms resolve the same way.
//!
//! # Example
//!
//! ```
//! use pullr::core::remotes::RemoteRegistry;
//!
//! let listing = "origin\tgit@forge:acme/widget.git (fetch)\n\
//!                origin\tgit@forge:acme/widget.git (push)\n";
//! let registry = RemoteRegistry::parse(listing).unwrap();
//! let origin = registry.get("origin").unwrap();
//! assert_eq!(origin.owner, "acme");
//! assert_eq!(origin.repo, "widget");
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors from parsing a remote listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteParseError {
    /// A line did not contain a name, a URL and an operation type.
    #[error("malformed remote listing line {line}: '{content}'")]
    MalformedLine {
        /// 1-indexed line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// The URL of a remote does not end in `owner/repo`.
    #[error("cannot extract owner/repo from url '{url}' of remote '{name}'")]
    MissingSegments {
        /// Remote name
        name: String,
        /// The URL that could not be split
        url: String,
    },
}

/// A remote resolved to the forge repository it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDescriptor {
    /// Remote name (e.g. "origin")
    pub name: String,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name, without a `.git` suffix
    pub repo: String,
}

/// Operation type of a listing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RemoteKind {
    Fetch,
    Push,
    Other,
}

impl RemoteKind {
    fn parse(token: &str) -> Option<Self> {
        let inner = token.strip_prefix('(')?.strip_suffix(')')?;
        Some(match inner {
            "fetch" => RemoteKind::Fetch,
            "push" => RemoteKind::Push,
            _ => RemoteKind::Other,
        })
    }
}

/// Mapping from remote name to [`RemoteDescriptor`].
///
/// Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteRegistry {
    remotes: BTreeMap<String, RemoteDescriptor>,
}

impl RemoteRegistry {
    /// Parse a verbose remote listing.
    ///
    /// Blank lines (including the trailing one) are skipped. Every other line
    /// must have the shape `name url (type)`; the URL is everything between
    /// the name and the type.
    ///
    /// # Errors
    ///
    /// - [`RemoteParseError::MalformedLine`] if a line has missing fields
    /// - [`RemoteParseError::MissingSegments`] if a fetch URL has no `owner/repo` tail
    pub fn parse(listing: &str) -> Result<Self, RemoteParseError> {
        let mut remotes = BTreeMap::new();

        for (index, line) in listing.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let malformed = || RemoteParseError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            };

            let (name, rest) = line
                .trim()
                .split_once(char::is_whitespace)
                .ok_or_else(malformed)?;
            let (url, kind) = rest
                .trim()
                .rsplit_once(char::is_whitespace)
                .ok_or_else(malformed)?;
            let url = url.trim();
            if url.is_empty() {
                return Err(malformed());
            }
            let kind = RemoteKind::parse(kind).ok_or_else(malformed)?;

            if kind != RemoteKind::Fetch {
                continue;
            }

            let (owner, repo) = split_owner_repo(url).ok_or_else(|| {
                RemoteParseError::MissingSegments {
                    name: name.to_string(),
                    url: url.to_string(),
                }
            })?;

            remotes.insert(
                name.to_string(),
                RemoteDescriptor {
                    name: name.to_string(),
                    owner,
                    repo,
                },
            );
        }

        Ok(Self { remotes })
    }

    /// Look up a remote by name.
    pub fn get(&self, name: &str) -> Option<&RemoteDescriptor> {
        self.remotes.get(name)
    }

    /// Number of remotes in the registry.
    pub fn len(&self) -> usize {
        self.remotes.len()
    }

    /// Check if the registry has no remotes.
    pub fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }

    /// Iterate over remotes in name order.
    pub fn iter(&self) -> impl Iterator<Item = &RemoteDescriptor> {
        self.remotes.values()
    }
}

/// Take the last two `:`/`/`-separated segments of a URL as owner and repo.
fn split_owner_repo(url: &str) -> Option<(String, String)> {
    let segments: Vec<&str> = url.split([':', '/']).collect();
    if segments.len() < 2 {
        return None;
    }

    let owner = segments[segments.len() - 2];
    let repo = segments[segments.len() - 1];
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if owner.is_empty() || repo.is_empty() {
        return None;
    }

    Some((owner.to_string(), repo.to_string()))
}
