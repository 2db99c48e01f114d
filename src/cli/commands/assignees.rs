//! cli::commands::assignees
//!
//! Issue assignment and the assignee listing.

use anyhow::Result;

use crate::engine::assign::assign_issue;
use crate::engine::assignees::list_assignees;
use crate::engine::{AssignRequest, Services};
use crate::ui::output::Printer;

/// Assign an issue and print the outcome.
pub async fn assign(
    services: &Services,
    request: &AssignRequest,
    printer: &Printer,
) -> Result<i32> {
    let outcome = match assign_issue(services, request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            printer.error(&e);
            return Ok(1);
        }
    };
    printer.outcome(&outcome);
    Ok(outcome.exit_code())
}

/// Print `index: login` for every assignable login of `remote`.
pub async fn list(services: &Services, remote: &str, printer: &Printer) -> Result<i32> {
    match list_assignees(services, remote).await {
        Ok(assignees) => {
            printer.assignees(&assignees);
            Ok(0)
        }
        Err(e) => {
            printer.error(format_args!("cannot list assignees: {}", e));
            Ok(1)
        }
    }
}
