//! forge::responses
//!
//! Per-endpoint response schemas and error-reason extraction.
//!
//! # Design
//!
//! Every schema derives `Default` and uses `#[serde(default)]`, so a missing
//! or unexpected field reads as `None`/empty instead of failing the decode.
//! See [`ApiResponse::decode`](super::ApiResponse::decode).
//!
//! The forge reports validation problems as an `errors` list next to a
//! top-level `message`. [`ErrorBody::reason`] picks the most specific entry,
//! and [`ErrorTranslations`] turns known vocabulary (such as `base`) into a
//! sentence a user can act on.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Translation used for the `base` error field.
pub const MISSING_BASE_MESSAGE: &str = "Remote branch doesn't exist. Did you push?";

/// One entry of the forge's `errors` list.
///
/// Entries are usually objects, but some endpoints send bare strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorEntry {
    /// Structured entry
    Detail {
        #[serde(default)]
        resource: Option<String>,
        #[serde(default)]
        field: Option<String>,
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
    /// Plain text entry
    Text(String),
}

impl ApiErrorEntry {
    /// The entry's `field`, falling back to its `message`.
    pub fn field_or_message(&self) -> Option<&str> {
        match self {
            ApiErrorEntry::Detail { field, message, .. } => field
                .as_deref()
                .filter(|f| !f.is_empty())
                .or(message.as_deref().filter(|m| !m.is_empty())),
            ApiErrorEntry::Text(text) => Some(text.as_str()).filter(|t| !t.is_empty()),
        }
    }
}

impl std::fmt::Display for ApiErrorEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiErrorEntry::Detail {
                resource,
                field,
                code,
                message,
            } => {
                let mut parts = Vec::new();
                if let Some(resource) = resource {
                    parts.push(resource.as_str());
                }
                if let Some(field) = field {
                    parts.push(field.as_str());
                }
                if let Some(code) = code {
                    parts.push(code.as_str());
                }
                if let Some(message) = message {
                    parts.push(message.as_str());
                }
                write!(f, "{}", parts.join(" "))
            }
            ApiErrorEntry::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Error envelope shared by every endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub errors: Vec<ApiErrorEntry>,
}

impl ErrorBody {
    /// The most specific reason in the body.
    ///
    /// The last `errors` entry's field (or message) wins; otherwise the
    /// top-level message.
    pub fn reason(&self) -> Option<&str> {
        self.errors
            .last()
            .and_then(ApiErrorEntry::field_or_message)
            .or(self.message.as_deref().filter(|m| !m.is_empty()))
    }

    /// The top-level message followed by every error entry.
    pub fn describe(&self) -> Option<String> {
        let details: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        match (self.message.as_deref(), details.is_empty()) {
            (Some(message), true) => Some(message.to_string()),
            (Some(message), false) => Some(format!("{} ({})", message, details.join("; "))),
            (None, false) => Some(details.join("; ")),
            (None, true) => None,
        }
    }
}

/// Response of `POST /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PullResponse {
    pub number: Option<u64>,
    pub state: Option<String>,
    pub html_url: Option<String>,
    #[serde(flatten)]
    pub error: ErrorBody,
}

impl PullResponse {
    /// Check whether the forge reports the pull request as open.
    pub fn is_open(&self) -> bool {
        self.state.as_deref() == Some("open")
    }
}

/// Response of `PATCH /repos/{owner}/{repo}/issues/{issue}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IssueResponse {
    pub number: Option<u64>,
    pub html_url: Option<String>,
    #[serde(flatten)]
    pub error: ErrorBody,
}

/// One element of `GET /repos/{owner}/{repo}/assignees`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssigneeEntry {
    pub login: String,
}

/// Table mapping forge error reasons to user-facing text.
///
/// Reasons without an entry pass through unchanged.
///
/// # Example
///
/// ```
/// use pullr::forge::ErrorTranslations;
///
/// let translations = ErrorTranslations::default();
/// assert_eq!(
///     translations.translate("base"),
///     "Remote branch doesn't exist. Did you push?"
/// );
/// assert_eq!(translations.translate("head"), "head");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTranslations {
    entries: BTreeMap<String, String>,
}

impl Default for ErrorTranslations {
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("base".to_string(), MISSING_BASE_MESSAGE.to_string());
        Self { entries }
    }
}

impl ErrorTranslations {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace a translation.
    pub fn insert(&mut self, reason: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(reason.into(), text.into());
    }

    /// Translate a reason, or return it unchanged.
    pub fn translate(&self, reason: &str) -> String {
        self.entries
            .get(reason)
            .cloned()
            .unwrap_or_else(|| reason.to_string())
    }
}
