//! engine::pull_request
//!
//! Opening a pull request.
//!
//! # Flow
//!
//! 1. **Gathering**: credentials, the remote registry, the default title and
//!    the default source branch are resolved concurrently. Values the caller
//!    supplied are not looked up.
//! 2. **Validating**: mode checks, remote lookup, repository match.
//! 3. **Preflighting** or **Submitting** one `POST` to the pulls endpoint.
//!
//! Nothing is dispatched unless validation passes.

use crate::auth::Credentials;
use crate::core::remotes::RemoteRegistry;
use crate::forge::responses::PullResponse;
use crate::forge::{ApiRequest, CreatePullBody};

use super::{
    resolve_remote, EngineError, Outcome, Services, DEFAULT_INTO_BRANCH, DEFAULT_REMOTE,
};

/// Message for a login-only run.
pub const LOGIN_MESSAGE: &str = "Login successful";

/// Options as the user gave them. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestOptions {
    /// Explicit request for a new pull request
    pub new_pr: bool,
    /// Title; defaults to the last commit subject
    pub title: Option<String>,
    /// Body text
    pub description: Option<String>,
    /// Target branch; defaults to `master`
    pub into_branch: Option<String>,
    /// Source branch; defaults to the current branch
    pub from_branch: Option<String>,
    /// Target remote; defaults to `origin`
    pub into_remote: Option<String>,
    /// Source remote; defaults to `origin`
    pub from_remote: Option<String>,
    /// Prompt for credentials even when some are stored
    pub force_login: bool,
    /// Validate and describe without submitting
    pub preflight: bool,
}

impl PullRequestOptions {
    /// A new pull request is wanted when asked for explicitly or when either
    /// branch is given.
    pub fn is_new_pr_requested(&self) -> bool {
        self.new_pr || self.into_branch.is_some() || self.from_branch.is_some()
    }
}

/// Fully resolved input for one submission.
///
/// Only built on the preflight and submit paths; a login-only run ends before
/// any descriptor exists, and output styling belongs to the printer.
#[derive(Clone, PartialEq, Eq)]
pub struct PullRequestDescriptor {
    pub title: String,
    pub description: Option<String>,
    pub from_branch: String,
    pub from_owner: String,
    pub from_repo: String,
    pub into_branch: String,
    pub into_owner: String,
    pub into_repo: String,
    pub credentials: Credentials,
    pub preflight: bool,
}

impl std::fmt::Debug for PullRequestDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PullRequestDescriptor")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("from", &format_args!("{}:{}", self.from_owner, self.from_branch))
            .field("from_repo", &self.from_repo)
            .field(
                "into",
                &format_args!("{}/{}@{}", self.into_owner, self.into_repo, self.into_branch),
            )
            .field("credentials", &self.credentials)
            .field("preflight", &self.preflight)
            .finish()
    }
}

impl PullRequestDescriptor {
    /// `<fromOwner>:<fromBranch>`, the `head` the forge expects.
    pub fn head(&self) -> String {
        format!("{}:{}", self.from_owner, self.from_branch)
    }

    fn summary(&self) -> String {
        format!(
            "a pull request from {} into {} for {}.",
            self.head(),
            self.into_branch,
            self.into_repo
        )
    }
}

/// Values resolved during gathering.
#[derive(Debug)]
struct Gathered {
    credentials: Credentials,
    registry: RemoteRegistry,
    title: String,
    from_branch: String,
    into_branch: String,
    from_remote: String,
    into_remote: String,
}

/// Run the pull-request workflow.
///
/// # Errors
///
/// Gathering and validation failures: [`EngineError::Credential`],
/// [`EngineError::Parse`], [`EngineError::NotARepository`],
/// [`EngineError::MissingOptions`], [`EngineError::UnknownRemote`],
/// [`EngineError::RepoMismatch`]. Submission problems are reported as
/// [`Outcome::Failed`] instead.
pub async fn open_pull_request(
    services: &Services,
    options: &PullRequestOptions,
) -> Result<Outcome, EngineError> {
    tracing::debug!(?options, "opening pull request");

    let gathered = gather(services, options).await?;
    let descriptor = match validate(gathered, options)? {
        Validated::LoginOnly => {
            return Ok(Outcome::LoginOnly {
                message: LOGIN_MESSAGE.to_string(),
            })
        }
        Validated::Ready(descriptor) => descriptor,
    };
    tracing::debug!(?descriptor, "validated pull request");

    if descriptor.preflight {
        return Ok(Outcome::Preflighted {
            message: format!("Success: Preflighted {}", descriptor.summary()),
        });
    }

    Ok(submit(services, &descriptor).await)
}

async fn gather(
    services: &Services,
    options: &PullRequestOptions,
) -> Result<Gathered, EngineError> {
    let repository = &services.repository;

    let credentials = async {
        Ok::<_, EngineError>(
            services
                .credentials
                .get_credentials(options.force_login)
                .await?,
        )
    };

    let title = async {
        match &options.title {
            Some(title) => Ok::<_, EngineError>(title.clone()),
            None => {
                let reference = options.from_branch.as_deref().unwrap_or("");
                Ok(repository.last_commit_subject(reference).await?)
            }
        }
    };

    let from_branch = async {
        match &options.from_branch {
            Some(branch) => Ok::<_, EngineError>(branch.clone()),
            None => Ok(repository.current_branch().await?),
        }
    };

    let (credentials, registry, title, from_branch) = tokio::try_join!(
        credentials,
        services.remote_registry(),
        title,
        from_branch
    )?;

    Ok(Gathered {
        credentials,
        registry,
        title,
        from_branch,
        into_branch: options
            .into_branch
            .clone()
            .unwrap_or_else(|| DEFAULT_INTO_BRANCH.to_string()),
        from_remote: options
            .from_remote
            .clone()
            .unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
        into_remote: options
            .into_remote
            .clone()
            .unwrap_or_else(|| DEFAULT_REMOTE.to_string()),
    })
}

enum Validated {
    LoginOnly,
    Ready(PullRequestDescriptor),
}

fn validate(gathered: Gathered, options: &PullRequestOptions) -> Result<Validated, EngineError> {
    let new_pr = options.is_new_pr_requested();

    if !new_pr && !options.force_login {
        return Err(EngineError::MissingOptions);
    }
    if !new_pr {
        return Ok(Validated::LoginOnly);
    }

    let from = resolve_remote(&gathered.registry, &gathered.from_remote)?;
    let into = resolve_remote(&gathered.registry, &gathered.into_remote)?;

    if from.repo != into.repo {
        return Err(EngineError::RepoMismatch {
            from_repo: from.repo.clone(),
            into_repo: into.repo.clone(),
        });
    }

    Ok(Validated::Ready(PullRequestDescriptor {
        title: gathered.title,
        description: options.description.clone(),
        from_branch: gathered.from_branch,
        from_owner: from.owner.clone(),
        from_repo: from.repo.clone(),
        into_branch: gathered.into_branch,
        into_owner: into.owner.clone(),
        into_repo: into.repo.clone(),
        credentials: gathered.credentials,
        preflight: options.preflight,
    }))
}

async fn submit(services: &Services, descriptor: &PullRequestDescriptor) -> Outcome {
    let head = descriptor.head();
    let body = CreatePullBody {
        head: &head,
        base: &descriptor.into_branch,
        title: &descriptor.title,
        body: descriptor.description.as_deref(),
    };
    let body = match serde_json::to_value(&body) {
        Ok(body) => body,
        Err(e) => return Outcome::failed(format!("cannot encode request: {}", e)),
    };

    let url = services
        .api
        .pulls_url(&descriptor.into_owner, &descriptor.into_repo);
    let request = ApiRequest::post(url, descriptor.credentials.clone(), body);

    let response = match services.dispatcher.dispatch(request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "pull request submission failed");
            return Outcome::failed(e.to_string());
        }
    };
    tracing::debug!(status = response.status, "pull request response");

    let pull: PullResponse = response.decode();
    if pull.is_open() {
        return Outcome::Opened {
            message: format!("Success: Opened {}", descriptor.summary()),
            url: pull.html_url,
        };
    }

    let reason = match pull.error.reason() {
        Some(reason) => services.translations.translate(reason),
        None => unexpected_response(response.status),
    };
    Outcome::Failed { reason }
}

/// Fallback reason when a response carries nothing usable.
pub(crate) fn unexpected_response(status: u16) -> String {
    format!("unexpected response from forge (HTTP {})", status)
}
