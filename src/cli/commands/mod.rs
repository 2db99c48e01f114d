//! cli::commands
//!
//! Command handlers.
//!
//! Each handler runs one engine workflow and prints its result through the
//! [`Printer`], engine errors included, and returns the process exit code.
//! Only failures outside the engine (such as writing the help text) propagate
//! to `main`.

mod assignees;
mod pull_request;

pub use assignees::{assign, list};
pub use pull_request::pull_request;

use anyhow::Result;

use crate::cli::args::{Cli, Mode};
use crate::engine::{Services, DEFAULT_REMOTE};
use crate::ui::output::Printer;

/// Dispatch to the workflow the flags select.
pub async fn dispatch(cli: &Cli, services: &Services, printer: &Printer) -> Result<i32> {
    match cli.mode() {
        Mode::PullRequest(options) => {
            pull_request(services, &options, cli.open_pr, printer).await
        }
        Mode::Assignees { assign: request, list: show } => {
            let mut code = 0;
            if let Some(request) = request {
                code = assign(services, &request, printer).await?;
            }
            if show {
                code = code.max(list(services, DEFAULT_REMOTE, printer).await?);
            }
            Ok(code)
        }
    }
}
