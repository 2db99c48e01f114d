//! cli
//!
//! Command-line interface layer for pullr.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Install the tracing subscriber
//! - Load configuration and assemble the engine's [`Services`]
//! - Delegate to command handlers and turn their result into an exit code
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to the
//! [`crate::engine`] workflows. The engine never sees flags or the
//! environment directly.

pub mod args;
pub mod commands;

pub use args::{Cli, Mode};

use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::Level;

use crate::auth::{StoredCredentials, TerminalPrompt};
use crate::core::config::Config;
use crate::engine::Services;
use crate::forge::{ForgeApi, HttpDispatcher};
use crate::git::LocalRepository;
use crate::secrets;
use crate::ui::output::Printer;

/// Run the CLI application and return the process exit code.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<i32> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let config = Config::load().context("failed to load configuration")?;
    if let Some(path) = config.loaded_from() {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    let services = build_services(&cli, &config)?;
    let printer = Printer::new(cli.plaintext);

    block_on(commands::dispatch(&cli, &services, &printer))?
}

/// Drive `future` to completion on a fresh runtime.
///
/// The runtime is shut down without waiting for blocking tasks, so a
/// credential prompt abandoned by a failed gather does not hold up the exit.
fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Runtime::new()?;
    let output = rt.block_on(future);
    rt.shutdown_background();
    Ok(output)
}

/// Log to stderr: `DEBUG` with `--debug`, `WARN` otherwise.
fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Assemble the engine's collaborators from flags and configuration.
pub fn build_services(cli: &Cli, config: &Config) -> Result<Services> {
    let cwd = match &cli.cwd {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let store = secrets::create_store(config.secrets_provider())
        .context("cannot open credential store")?;
    let credentials = StoredCredentials::new(
        Arc::from(store),
        Arc::new(TerminalPrompt::new(cli.interactive())),
    );

    let api_base = config.api_base();
    tracing::debug!(%api_base, cwd = %cwd.display(), "assembled services");

    Ok(Services::new(
        Arc::new(credentials),
        Arc::new(LocalRepository::new(cwd)),
        Arc::new(HttpDispatcher::new()),
        ForgeApi::new(api_base),
    )
    .with_translations(config.error_translations()))
}
