//! Configuration schema definitions.
//!
//! The user configuration lives in `osflinter.config.yml` at the project
//! root. Keys are camelCase to match the original JavaScript config module.

use serde::{Deserialize, Deserializer, Serialize};

/// Root configuration structure for osflinter.
///
/// # Example
///
/// ```yaml
/// eslintClientPaths:
///   - "src/**/*.js"
///   - "!src/vendor/**"
/// ```
///
/// A single pattern may be written as a plain string:
/// `eslintClientPaths: "src/*.js"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinterConfig {
    /// Glob patterns selecting files to lint, in order.
    ///
    /// Patterns starting with `!` exclude matches.
    #[serde(deserialize_with = "one_or_many")]
    pub eslint_client_paths: Vec<String>,

    /// Which lint engine to run.
    #[serde(default)]
    pub engine: EngineKind,

    /// Command used to launch ESLint when `engine: eslint`.
    #[serde(default = "default_eslint_command")]
    pub eslint_command: Vec<String>,
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            eslint_client_paths: Vec::new(),
            engine: EngineKind::default(),
            eslint_command: default_eslint_command(),
        }
    }
}

/// Lint engine selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// External ESLint process.
    #[default]
    Eslint,
    /// In-process approximation of the baseline rules.
    ///
    /// Opt-in fallback for machines without Node. It scans source line by
    /// line and can disagree with ESLint on unusual syntax.
    Builtin,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(pattern) => vec![pattern],
        OneOrMany::Many(patterns) => patterns,
    })
}

fn default_eslint_command() -> Vec<String> {
    vec!["npx".to_string(), "eslint".to_string()]
}
