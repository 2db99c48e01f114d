//! engine
//!
//! The three workflows pullr runs against a forge.
//!
//! # Workflows
//!
//! - [`pull_request`]: open (or preflight) a pull request
//!
//!   ```text
//!   Gathering -> Validating -> {LoginOnly | Preflighting | Submitting} -> Outcome
//!   ```
//!
//! - [`assign`]: assign an issue to a login
//! - [`assignees`]: list the logins an issue can be assigned to
//!
//! # Invariants
//!
//! - Gathering is a fixed-arity join; the first failure aborts it
//! - Source and target repositories match before anything is dispatched
//! - At most one API request is dispatched per workflow, never retried
//! - The engine never reads flags, the environment, or global state;
//!   everything arrives through [`Services`] and explicit option structs
//!
//! # Example
//!
//! ```ignore
//! use pullr::engine::{pull_request, PullRequestOptions, Services};
//!
//! let options = PullRequestOptions { new_pr: true, preflight: true, ..Default::default() };
//! let outcome = pull_request::open_pull_request(&services, &options).await?;
//! std::process::exit(outcome.exit_code());
//! ```

pub mod assign;
pub mod assignees;
mod error;
mod outcome;
pub mod pull_request;

pub use assign::AssignRequest;
pub use assignees::Assignee;
pub use error::EngineError;
pub use outcome::Outcome;
pub use pull_request::{PullRequestDescriptor, PullRequestOptions};

use std::sync::Arc;

use crate::auth::{CredentialSource, Credentials};
use crate::core::remotes::{RemoteDescriptor, RemoteRegistry};
use crate::forge::{ApiDispatcher, ErrorTranslations, ForgeApi};
use crate::git::RepoIntrospector;

/// Remote name used when none is given.
pub const DEFAULT_REMOTE: &str = "origin";

/// Target branch used when none is given.
pub const DEFAULT_INTO_BRANCH: &str = "master";

/// Collaborators a workflow runs against.
#[derive(Clone)]
pub struct Services {
    /// Where credentials come from
    pub credentials: Arc<dyn CredentialSource>,
    /// The local repository
    pub repository: Arc<dyn RepoIntrospector>,
    /// Sends requests to the forge
    pub dispatcher: Arc<dyn ApiDispatcher>,
    /// Endpoint layout
    pub api: ForgeApi,
    /// Error reasons rewritten for the user
    pub translations: ErrorTranslations,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("api", &self.api)
            .field("translations", &self.translations)
            .finish_non_exhaustive()
    }
}

impl Services {
    /// Bundle collaborators with the default error translations.
    pub fn new(
        credentials: Arc<dyn CredentialSource>,
        repository: Arc<dyn RepoIntrospector>,
        dispatcher: Arc<dyn ApiDispatcher>,
        api: ForgeApi,
    ) -> Self {
        Self {
            credentials,
            repository,
            dispatcher,
            api,
            translations: ErrorTranslations::default(),
        }
    }

    /// Replace the error translation table.
    pub fn with_translations(mut self, translations: ErrorTranslations) -> Self {
        self.translations = translations;
        self
    }

    /// Read and parse the remote listing.
    pub(crate) async fn remote_registry(&self) -> Result<RemoteRegistry, EngineError> {
        let listing = self.repository.remote_listing().await?;
        let registry = RemoteRegistry::parse(&listing)?;
        tracing::debug!(remotes = registry.len(), "parsed remote listing");
        Ok(registry)
    }

    /// Gather stored credentials and resolve one remote, concurrently.
    pub(crate) async fn credentials_and_remote(
        &self,
        remote: &str,
    ) -> Result<(Credentials, RemoteDescriptor), EngineError> {
        let (credentials, registry) = tokio::try_join!(
            async { Ok::<_, EngineError>(self.credentials.get_credentials(false).await?) },
            self.remote_registry(),
        )?;

        let descriptor = resolve_remote(&registry, remote)?.clone();

        Ok((credentials, descriptor))
    }
}

/// Look up a remote, failing with [`EngineError::UnknownRemote`].
pub(crate) fn resolve_remote<'a>(
    registry: &'a RemoteRegistry,
    name: &str,
) -> Result<&'a RemoteDescriptor, EngineError> {
    registry.get(name).ok_or_else(|| {
        let known: Vec<&str> = registry.iter().map(|r| r.name.as_str()).collect();
        tracing::debug!(remote = name, ?known, "remote has no fetch entry");
        EngineError::UnknownRemote(name.to_string())
    })
}
