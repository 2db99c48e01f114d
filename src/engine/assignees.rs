//! engine::assignees
//!
//! Listing the logins issues on the `origin` repository can be assigned to.

use crate::forge::responses::{AssigneeEntry, ErrorBody};
use crate::forge::ApiRequest;

use super::pull_request::unexpected_response;
use super::{EngineError, Services};

/// One assignable login, numbered in API order starting at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignee {
    pub index: usize,
    pub login: String,
}

/// Fetch the assignee list of `remote`'s repository with one `GET`.
///
/// # Errors
///
/// - gathering failures (credentials, remote listing, unknown remote)
/// - [`EngineError::Transport`] if the forge cannot be reached
/// - [`EngineError::Api`] for a non-success status
pub async fn list_assignees(
    services: &Services,
    remote: &str,
) -> Result<Vec<Assignee>, EngineError> {
    let (credentials, remote) = services.credentials_and_remote(remote).await?;
    let url = services.api.assignees_url(&remote.owner, &remote.repo);
    tracing::debug!(%url, "listing assignees");

    let response = services
        .dispatcher
        .dispatch(ApiRequest::get(url, credentials))
        .await?;

    if !response.is_success() {
        let error: ErrorBody = response.decode();
        return Err(EngineError::Api {
            status: response.status,
            reason: error
                .describe()
                .unwrap_or_else(|| unexpected_response(response.status)),
        });
    }

    let entries: Vec<AssigneeEntry> = response.decode();
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| Assignee {
            index,
            login: entry.login,
        })
        .collect())
}
