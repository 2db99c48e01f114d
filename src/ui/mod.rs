//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Outcome, listing, and error display
//!
//! # Design
//!
//! Results go to stdout and failures to stderr. Diagnostics go through
//! `tracing`, never through this module.

pub mod output;
