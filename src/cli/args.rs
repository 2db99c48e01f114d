//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! pullr has no subcommands. Flags select the workflow:
//!
//! - `--new`, `--into`, `--from` or `--force-login`: open a pull request
//!   (or just log in)
//! - `--set-assignee --issue N --login L`: assign an issue
//! - `--list-assignees`: list assignable logins

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use crate::engine::{AssignRequest, PullRequestOptions};

/// pullr - open pull requests from the command line
#[derive(Parser, Debug)]
#[command(name = "pullr")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Open a pull request from the current branch into master
    pullr --new

    # Check everything without submitting
    pullr --new --preflight

    # From a fork remote into develop, with a title
    pullr -F alice -i develop -t \"Fix the widget\"

    # Re-enter credentials
    pullr --force-login

    # Assign issue 42 to bob
    pullr --set-assignee --issue 42 --login bob")]
pub struct Cli {
    /// Open a new pull request
    #[arg(short = 'n', long = "new")]
    pub new_pr: bool,

    /// Title of the pull request (default: last commit subject)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Description of the pull request
    #[arg(short, long)]
    pub description: Option<String>,

    /// Branch to merge into (default: master)
    #[arg(short, long, value_name = "BRANCH")]
    pub into: Option<String>,

    /// Branch to merge from (default: current branch)
    #[arg(short, long, value_name = "BRANCH")]
    pub from: Option<String>,

    /// Remote to merge into (default: origin)
    #[arg(short = 'I', long, value_name = "REMOTE")]
    pub into_remote: Option<String>,

    /// Remote to merge from (default: origin)
    #[arg(short = 'F', long, value_name = "REMOTE")]
    pub from_remote: Option<String>,

    /// Prompt for credentials even if some are stored
    #[arg(short = 'l', long)]
    pub force_login: bool,

    /// Validate the pull request without opening it
    #[arg(short, long)]
    pub preflight: bool,

    /// Plain output without colors
    #[arg(long)]
    pub plaintext: bool,

    /// List logins issues can be assigned to
    #[arg(short = 'c', long, visible_alias = "list-coders")]
    pub list_assignees: bool,

    /// Assign the issue given by --issue to the login given by --login
    #[arg(
        short = 's',
        long,
        visible_alias = "set-coder",
        requires = "issue",
        requires = "login"
    )]
    pub set_assignee: bool,

    /// Login of the assignee
    #[arg(long, value_name = "LOGIN")]
    pub login: Option<String>,

    /// Issue or pull request number
    #[arg(long, value_name = "NUMBER")]
    pub issue: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Open the new pull request in a browser
    #[arg(long)]
    pub open_pr: bool,

    /// Never prompt; fail if no credentials are stored
    #[arg(long)]
    pub no_interactive: bool,

    /// Run as if pullr was started in this directory
    #[arg(long, value_name = "PATH")]
    pub cwd: Option<PathBuf>,
}

/// Which workflow the flags select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Open a pull request (or log in, or report missing options)
    PullRequest(PullRequestOptions),
    /// Assignment workflows; either or both
    Assignees {
        assign: Option<AssignRequest>,
        list: bool,
    },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if credential prompts are allowed.
    ///
    /// True unless `--no-interactive` was given or stdin is not a terminal.
    pub fn interactive(&self) -> bool {
        !self.no_interactive && std::io::stdin().is_terminal()
    }

    /// Options for the pull-request workflow.
    pub fn pull_request_options(&self) -> PullRequestOptions {
        PullRequestOptions {
            new_pr: self.new_pr,
            title: self.title.clone(),
            description: self.description.clone(),
            into_branch: self.into.clone(),
            from_branch: self.from.clone(),
            into_remote: self.into_remote.clone(),
            from_remote: self.from_remote.clone(),
            force_login: self.force_login,
            preflight: self.preflight,
        }
    }

    /// Pick the workflow.
    ///
    /// Pull-request flags and `--force-login` win; otherwise the assignment
    /// flags; otherwise the pull-request workflow, which reports the missing
    /// options.
    pub fn mode(&self) -> Mode {
        let options = self.pull_request_options();
        if options.is_new_pr_requested() || options.force_login {
            return Mode::PullRequest(options);
        }

        let assign = match (self.set_assignee, &self.issue, &self.login) {
            (true, Some(issue), Some(login)) => Some(AssignRequest::new(issue, login)),
            _ => None,
        };
        if assign.is_some() || self.list_assignees {
            return Mode::Assignees {
                assign,
                list: self.list_assignees,
            };
        }

        Mode::PullRequest(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["pullr"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_map_to_options() {
        let cli = parse(&[
            "-n", "-t", "Title", "-d", "Body", "-i", "develop", "-f", "topic", "-I", "upstream",
            "-F", "alice", "-p",
        ]);
        let options = cli.pull_request_options();

        assert!(options.new_pr);
        assert!(options.preflight);
        assert_eq!(options.title.as_deref(), Some("Title"));
        assert_eq!(options.description.as_deref(), Some("Body"));
        assert_eq!(options.into_branch.as_deref(), Some("develop"));
        assert_eq!(options.from_branch.as_deref(), Some("topic"));
        assert_eq!(options.into_remote.as_deref(), Some("upstream"));
        assert_eq!(options.from_remote.as_deref(), Some("alice"));
    }

    #[test]
    fn branch_flag_selects_pull_request() {
        let cli = parse(&["--into", "develop", "--list-assignees"]);
        assert!(matches!(cli.mode(), Mode::PullRequest(_)));
    }

    #[test]
    fn force_login_selects_pull_request() {
        let cli = parse(&["-l"]);
        match cli.mode() {
            Mode::PullRequest(options) => assert!(options.force_login),
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn legacy_aliases_select_assignees() {
        let cli = parse(&["--list-coders"]);
        assert_eq!(
            cli.mode(),
            Mode::Assignees {
                assign: None,
                list: true
            }
        );

        let cli = parse(&["--set-coder", "--issue", "42", "--login", "bob"]);
        assert_eq!(
            cli.mode(),
            Mode::Assignees {
                assign: Some(AssignRequest::new("42", "bob")),
                list: false
            }
        );
    }

    #[test]
    fn set_assignee_requires_issue_and_login() {
        assert!(Cli::try_parse_from(["pullr", "--set-assignee", "--login", "bob"]).is_err());
        assert!(Cli::try_parse_from(["pullr", "--set-assignee", "--issue", "42"]).is_err());
    }

    #[test]
    fn no_flags_falls_through_to_pull_request() {
        let cli = parse(&[]);
        match cli.mode() {
            Mode::PullRequest(options) => assert_eq!(options, PullRequestOptions::default()),
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn no_interactive_disables_prompts() {
        assert!(!parse(&["--no-interactive"]).interactive());
    }
}
