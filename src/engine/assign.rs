//! engine::assign
//!
//! Assigning an issue to a login on the `origin` repository.

use crate::forge::responses::IssueResponse;
use crate::forge::{ApiRequest, AssignIssueBody};

use super::pull_request::unexpected_response;
use super::{EngineError, Outcome, Services, DEFAULT_REMOTE};

/// Which issue goes to whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignRequest {
    /// Issue (or pull request) number, as typed
    pub issue: String,
    /// Login of the new assignee
    pub login: String,
    /// Remote naming the repository; `origin` by default
    pub remote: String,
}

impl AssignRequest {
    /// Assign `issue` to `login` on the default remote's repository.
    pub fn new(issue: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            issue: issue.into(),
            login: login.into(),
            remote: DEFAULT_REMOTE.to_string(),
        }
    }
}

/// Send one `PATCH` setting the issue's assignee.
///
/// - 404 fails with `issue <id> not found`
/// - any other non-200 fails with the body's message and error list
/// - 200 names the issue and the assignee
///
/// # Errors
///
/// Gathering failures (credentials, remote listing, unknown remote).
pub async fn assign_issue(
    services: &Services,
    request: &AssignRequest,
) -> Result<Outcome, EngineError> {
    let (credentials, remote) = services.credentials_and_remote(&request.remote).await?;

    let body = match serde_json::to_value(AssignIssueBody {
        assignee: &request.login,
    }) {
        Ok(body) => body,
        Err(e) => return Ok(Outcome::failed(format!("cannot encode request: {}", e))),
    };
    let url = services
        .api
        .issue_url(&remote.owner, &remote.repo, &request.issue);
    tracing::debug!(%url, assignee = %request.login, "assigning issue");

    let response = match services
        .dispatcher
        .dispatch(ApiRequest::patch(url, credentials, body))
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "issue assignment failed");
            return Ok(Outcome::failed(e.to_string()));
        }
    };
    tracing::debug!(status = response.status, "issue assignment response");

    Ok(match response.status {
        200 => Outcome::Assigned {
            message: format!("Issue {} was assigned to {}", request.issue, request.login),
        },
        404 => Outcome::failed(format!("issue {} not found", request.issue)),
        status => {
            let issue: IssueResponse = response.decode();
            Outcome::failed(
                issue
                    .error
                    .describe()
                    .unwrap_or_else(|| unexpected_response(status)),
            )
        }
    })
}
