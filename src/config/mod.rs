//! Configuration loading for osflinter.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use osflinter::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("osflinter.config.yml"),
//!     "eslintClientPaths: [\"src/**/*.js\"]",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.eslint_client_paths, vec!["src/**/*.js"]);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{EngineKind, LinterConfig};
