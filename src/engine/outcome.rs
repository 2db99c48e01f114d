//! engine::outcome
//!
//! Terminal result of one workflow run.

/// What a workflow ended with.
///
/// Everything except [`Outcome::Failed`] is a success; see
/// [`Outcome::exit_code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Credentials were refreshed and nothing else was requested.
    LoginOnly { message: String },
    /// The pull request was validated but not submitted.
    Preflighted { message: String },
    /// The forge opened the pull request.
    Opened {
        message: String,
        /// `html_url` exactly as the forge returned it
        url: Option<String>,
    },
    /// An issue was assigned.
    Assigned { message: String },
    /// The forge rejected the request, or could not be reached.
    Failed { reason: String },
}

impl Outcome {
    /// Build a failure.
    pub fn failed(reason: impl Into<String>) -> Self {
        Outcome::Failed {
            reason: reason.into(),
        }
    }

    /// Check whether this is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    /// Process exit code: 0 for success, 1 for failure.
    pub fn exit_code(&self) -> i32 {
        if self.is_failure() {
            1
        } else {
            0
        }
    }

    /// The message or failure reason.
    pub fn message(&self) -> &str {
        match self {
            Outcome::LoginOnly { message }
            | Outcome::Preflighted { message }
            | Outcome::Opened { message, .. }
            | Outcome::Assigned { message } => message,
            Outcome::Failed { reason } => reason,
        }
    }

    /// URL of the opened pull request, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            Outcome::Opened { url, .. } => url.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(
            Outcome::LoginOnly {
                message: "ok".into()
            }
            .exit_code(),
            0
        );
        assert_eq!(
            Outcome::Opened {
                message: "ok".into(),
                url: None
            }
            .exit_code(),
            0
        );
        assert_eq!(Outcome::failed("head").exit_code(), 1);
    }

    #[test]
    fn url_only_for_opened() {
        let opened = Outcome::Opened {
            message: "m".into(),
            url: Some("https://forge/acme/widget/pull/7".into()),
        };
        assert_eq!(opened.url(), Some("https://forge/acme/widget/pull/7"));
        assert_eq!(Outcome::failed("x").url(), None);
        assert_eq!(Outcome::failed("x").message(), "x");
    }
}
