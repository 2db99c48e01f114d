//! cli::commands::pull_request
//!
//! Open, preflight, or log in.

use anyhow::Result;
use clap::CommandFactory;

use crate::cli::args::Cli;
use crate::engine::pull_request::open_pull_request;
use crate::engine::{EngineError, Outcome, PullRequestOptions, Services};
use crate::ui::output::Printer;

/// Run the pull-request workflow and print its outcome.
///
/// Engine errors are printed and exit 1; missing options print the usage
/// help first. With `open_pr`, an opened pull request's URL is handed to the
/// system browser.
pub async fn pull_request(
    services: &Services,
    options: &PullRequestOptions,
    open_pr: bool,
    printer: &Printer,
) -> Result<i32> {
    let outcome = match open_pull_request(services, options).await {
        Ok(outcome) => outcome,
        Err(e) => {
            if matches!(e, EngineError::MissingOptions) {
                Cli::command().print_help()?;
                println!();
            }
            printer.error(&e);
            return Ok(1);
        }
    };

    printer.outcome(&outcome);

    if let (true, Outcome::Opened { url: Some(url), .. }) = (open_pr, &outcome) {
        if let Err(e) = open::that(url) {
            tracing::warn!(error = %e, %url, "cannot open browser");
        }
    }

    Ok(outcome.exit_code())
}
