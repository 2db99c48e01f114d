//! core
//!
//! Domain types and configuration.
//!
//! # Modules
//!
//! - [`remotes`] - Remote listing parser and the remote registry
//! - [`config`] - Configuration schema and loading

pub mod config;
pub mod remotes;
