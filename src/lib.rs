//! pullr - open pull requests from the command line
//!
//! pullr derives what a pull request needs (source branch, title, owner and
//! repository) from the local repository, validates it, and submits it to a
//! GitHub-compatible forge. It can also assign issues and list the logins
//! they can be assigned to.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - The pull-request, assignment, and listing workflows
//! - [`core`] - Remote registry parser and configuration
//! - [`git`] - Single interface for all Git access
//! - [`forge`] - Forge REST API dispatcher and response schemas
//! - [`auth`] - Forge credentials
//! - [`secrets`] - Secret storage abstraction
//! - [`ui`] - Output formatting
//!
//! # Invariants
//!
//! 1. Source and target repositories match before any request is sent
//! 2. Each workflow sends at most one request and never retries
//! 3. Credentials never appear in logs, errors, or debug output

pub mod auth;
pub mod cli;
pub mod core;
pub mod engine;
pub mod forge;
pub mod git;
pub mod secrets;
pub mod ui;
