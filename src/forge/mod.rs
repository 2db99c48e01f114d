//! forge
//!
//! Minimal client surface for a GitHub-compatible forge REST API.
//!
//! # Architecture
//!
//! - `traits`: the [`ApiDispatcher`] trait and request/response types
//! - [`http`]: `reqwest` implementation of the dispatcher
//! - [`responses`]: per-endpoint response schemas and error translation
//! - [`mock`]: recording dispatcher for deterministic testing
//!
//! [`ForgeApi`] knows the endpoint layout under `<api_base>/repos`; it builds
//! URLs and request bodies but never sends anything itself.
//!
//! # Example
//!
//! ```
//! use pullr::forge::ForgeApi;
//!
//! let api = ForgeApi::new("https://github.example.com/api/v3");
//! assert_eq!(
//!     api.pulls_url("acme", "widget"),
//!     "https://github.example.com/api/v3/repos/acme/widget/pulls"
//! );
//! ```

pub mod http;
pub mod mock;
pub mod responses;
mod traits;

pub use http::HttpDispatcher;
pub use responses::{ErrorTranslations, MISSING_BASE_MESSAGE};
pub use traits::*;

use serde::Serialize;

/// Endpoint layout of the forge API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeApi {
    /// API base URL, e.g. `https://github.example.com/api/v3`
    api_base: String,
}

impl ForgeApi {
    /// Create an endpoint map rooted at `api_base`.
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// The API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build URL for a repository endpoint.
    fn repo_url(&self, owner: &str, repo: &str, path: &str) -> String {
        format!("{}/repos/{}/{}/{}", self.api_base, owner, repo, path)
    }

    /// `POST` target for opening a pull request.
    pub fn pulls_url(&self, owner: &str, repo: &str) -> String {
        self.repo_url(owner, repo, "pulls")
    }

    /// `PATCH` target for an issue.
    pub fn issue_url(&self, owner: &str, repo: &str, issue: &str) -> String {
        self.repo_url(owner, repo, &format!("issues/{}", issue))
    }

    /// `GET` target for the assignee list.
    pub fn assignees_url(&self, owner: &str, repo: &str) -> String {
        self.repo_url(owner, repo, "assignees")
    }
}

/// Request body for opening a pull request.
#[derive(Debug, Serialize)]
pub struct CreatePullBody<'a> {
    /// `<owner>:<branch>` of the source
    pub head: &'a str,
    /// Target branch
    pub base: &'a str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<&'a str>,
}

/// Request body for assigning an issue.
#[derive(Debug, Serialize)]
pub struct AssignIssueBody<'a> {
    pub assignee: &'a str,
}
