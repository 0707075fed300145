//! Configuration file discovery and loading.
//!
//! The config is read from the working directory only; there is no
//! parent-directory walk and no merging.

use crate::config::schema::LinterConfig;
use crate::error::{OsfLinterError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Primary configuration file name.
pub const CONFIG_FILE_NAME: &str = "osflinter.config.yml";

/// Alternate names tried, in order, when the primary file is absent.
const ALTERNATE_FILE_NAMES: &[&str] = &["osflinter.config.yaml", "osflinter.config.json"];

/// Field that must be present and truthy.
const PATHS_FIELD: &str = "eslintClientPaths";

/// Locate the configuration file in `cwd`.
///
/// # Errors
///
/// Returns `ConfigNotFound` naming `<cwd>/osflinter.config.yml` when no
/// candidate exists.
pub fn find_config(cwd: &Path) -> Result<PathBuf> {
    let primary = cwd.join(CONFIG_FILE_NAME);
    if primary.is_file() {
        return Ok(primary);
    }

    ALTERNATE_FILE_NAMES
        .iter()
        .map(|name| cwd.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or(OsfLinterError::ConfigNotFound { path: primary })
}

/// Find and load the configuration for `cwd`.
pub fn load_config(cwd: &Path) -> Result<LinterConfig> {
    let path = find_config(cwd)?;
    tracing::debug!("Loading config from {}", path.display());
    load_config_file(&path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigImport` if the file cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<LinterConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OsfLinterError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            OsfLinterError::ConfigImport {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })?;

    parse_config(&content, path)
}

/// Parse config content.
///
/// The document is checked as a raw value first so that an empty export
/// and a missing `eslintClientPaths` are reported distinctly from syntax
/// errors.
///
/// # Arguments
///
/// * `content` - YAML or JSON content
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LinterConfig> {
    let import_error = |e: serde_yaml::Error| OsfLinterError::ConfigImport {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    };

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(import_error)?;

    if is_falsy(&value) {
        return Err(OsfLinterError::ConfigEmpty {
            path: source_path.to_path_buf(),
        });
    }

    match value.get(PATHS_FIELD) {
        Some(paths) if !is_falsy(paths) => {}
        _ => {
            return Err(OsfLinterError::MissingLintPaths {
                path: source_path.to_path_buf(),
            })
        }
    }

    serde_yaml::from_value(value).map_err(import_error)
}

/// JavaScript truthiness over a YAML value. Empty sequences and mappings
/// are truthy.
fn is_falsy(value: &serde_yaml::Value) -> bool {
    match value {
        serde_yaml::Value::Null => true,
        serde_yaml::Value::Bool(b) => !b,
        serde_yaml::Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0 || f.is_nan()),
        serde_yaml::Value::String(s) => s.is_empty(),
        serde_yaml::Value::Tagged(tagged) => is_falsy(&tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => false,
    }
}
