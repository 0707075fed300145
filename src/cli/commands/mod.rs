//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running `osflinter` with no
//! subcommand is the same as `osflinter eslint-client`.

pub mod completions;
pub mod dispatcher;
pub mod eslint_client;
pub mod rules;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
