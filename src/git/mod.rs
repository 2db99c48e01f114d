//! git
//!
//! Single interface for all Git access.
//!
//! # Architecture
//!
//! This module is the **only doorway** to Git. No other module imports
//! `git2`. Everything pullr needs from the local repository is read-only:
//!
//! - the remote listing, rendered as `git remote -v` text
//! - the checked-out branch name
//! - the subject line of the newest commit on a ref
//!
//! [`Git`] is the synchronous doorway; [`RepoIntrospector`] is the async seam
//! the engine gathers through, implemented by [`LocalRepository`].

mod interface;
mod introspect;

pub use interface::{Git, GitError};
pub use introspect::{LocalRepository, RepoIntrospector};
