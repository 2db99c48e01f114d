//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Successes are shown green and reversed, failures red and reversed, unless
//! `--plaintext` is given. Styling uses `crossterm`.

use std::fmt::Display;

use crossterm::style::Stylize;

use crate::engine::{Assignee, Outcome};

/// Writes results, styled or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    plaintext: bool,
}

impl Printer {
    /// Create a printer; `plaintext` disables ANSI styling.
    pub fn new(plaintext: bool) -> Self {
        Self { plaintext }
    }

    /// Format a success line.
    pub fn format_success(&self, message: &str) -> String {
        if self.plaintext {
            message.to_string()
        } else {
            format!(" {} ", message).green().reverse().to_string()
        }
    }

    /// Format a failure line.
    pub fn format_failure(&self, message: &str) -> String {
        if self.plaintext {
            message.to_string()
        } else {
            format!(" {} ", message).red().reverse().to_string()
        }
    }

    /// Format one assignee as `index: login`.
    pub fn format_assignee(&self, assignee: &Assignee) -> String {
        let index = format!("{}:", assignee.index);
        if self.plaintext {
            format!("{} {}", index, assignee.login)
        } else {
            format!("{} {}", index.green(), assignee.login)
        }
    }

    /// Print an outcome: the message, then the URL of an opened pull request.
    pub fn outcome(&self, outcome: &Outcome) {
        if outcome.is_failure() {
            eprintln!("{}", self.format_failure(outcome.message()));
            return;
        }

        println!("{}", self.format_success(outcome.message()));
        if let Some(url) = outcome.url() {
            println!("{}", url);
        }
    }

    /// Print the assignee listing, one per line.
    pub fn assignees(&self, assignees: &[Assignee]) {
        for assignee in assignees {
            println!("{}", self.format_assignee(assignee));
        }
    }

    /// Print a fatal error.
    pub fn error(&self, message: impl Display) {
        eprintln!("{}", self.format_failure(&format!("error: {}", message)));
    }
}
