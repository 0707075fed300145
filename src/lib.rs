//! osflinter - a lint wrapper for CI.
//!
//! osflinter reads `osflinter.config.yml`, lints the files matched by its
//! `eslintClientPaths` globs against a fixed baseline rule set, prints an
//! ESLint-style summary to stderr and, on request, writes a JSON report of
//! code-review annotations.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration discovery and parsing
//! - [`error`] - Error types and result aliases
//! - [`exit`] - Run outcomes and exit codes
//! - [`lint`] - Baseline rules and lint engines
//! - [`paths`] - Glob expansion of lint targets
//! - [`pipeline`] - The end-to-end eslint-client run
//! - [`report`] - Stylish output and the JSON annotation report
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use osflinter::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "eslintClientPaths:\n  - src/**/*.js\n",
//!     Path::new("osflinter.config.yml"),
//! )
//! .unwrap();
//! assert_eq!(config.eslint_client_paths, vec!["src/**/*.js"]);
//! ```
//!
//! For full runs, see [`pipeline::run`] and the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod lint;
pub mod paths;
pub mod pipeline;
pub mod report;
pub mod ui;

pub use error::{OsfLinterError, Result};
