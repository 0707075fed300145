//! Glob expansion of the configured lint targets.
//!
//! Pattern semantics come from the `glob` crate. Relative patterns are
//! resolved against the working directory; patterns starting with `!`
//! remove matches produced by the positive patterns.

use crate::error::{OsfLinterError, Result};
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Expand `patterns` into a deduplicated list of files under `cwd`.
///
/// Files keep the order in which they were first matched. Directories are
/// skipped. An empty result is not an error.
///
/// # Errors
///
/// Returns `LintRun` when a pattern is not a valid glob.
pub fn expand_paths(cwd: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut includes = Vec::new();
    let mut excludes = Vec::new();
    for raw in patterns {
        match raw.strip_prefix('!') {
            Some(negated) => excludes.push(compile(cwd, negated)?),
            None => includes.push(absolute_pattern(cwd, raw)),
        }
    }

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for pattern in &includes {
        let entries = glob::glob_with(pattern, MATCH_OPTIONS).map_err(|e| {
            OsfLinterError::lint_run(format!("Invalid glob pattern '{}': {}", pattern, e))
        })?;

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    tracing::debug!("Skipping unreadable path: {}", e);
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            if excludes
                .iter()
                .any(|ex| ex.matches_path_with(&path, MATCH_OPTIONS))
            {
                continue;
            }
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    tracing::debug!(
        "Expanded {} pattern(s) into {} file(s)",
        patterns.len(),
        files.len()
    );
    Ok(files)
}

fn compile(cwd: &Path, raw: &str) -> Result<Pattern> {
    let pattern = absolute_pattern(cwd, raw);
    Pattern::new(&pattern).map_err(|e| {
        OsfLinterError::lint_run(format!("Invalid glob pattern '{}': {}", raw, e))
    })
}

fn absolute_pattern(cwd: &Path, raw: &str) -> String {
    let relative = raw.strip_prefix("./").unwrap_or(raw);
    if Path::new(relative).is_absolute() {
        return relative.to_string();
    }
    // Escape the directory part so metacharacters in it match literally.
    let base = Pattern::escape(&cwd.to_string_lossy());
    format!("{}/{}", base.trim_end_matches('/'), relative)
}
