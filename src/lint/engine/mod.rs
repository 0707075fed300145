//! Lint engines.
//!
//! A [`LintEngine`] turns a list of files into a [`LintReport`]. Two engines
//! ship with osflinter:
//!
//! - [`EslintEngine`] delegates to an external ESLint installation (default)
//! - [`BuiltinEngine`] runs the in-process rules from [`crate::lint::rules`],
//!   an approximate fallback selected with `engine: builtin`
//!
//! Both are configured with the bundled [`Baseline`].

pub mod builtin;
pub mod eslint;

pub use builtin::BuiltinEngine;
pub use eslint::EslintEngine;

use std::path::{Path, PathBuf};

use super::baseline::Baseline;
use super::result::LintReport;
use crate::config::{EngineKind, LinterConfig};
use crate::error::Result;

/// Something that can lint a set of files.
pub trait LintEngine {
    /// Short engine name for logging.
    fn name(&self) -> &str;

    /// Lint every file, returning one result per file in input order.
    ///
    /// Findings are data, not errors; `Err` means the engine itself failed.
    fn lint_files(&self, files: &[PathBuf]) -> Result<LintReport>;
}

/// Build the engine selected by `config`.
pub fn create_engine(
    config: &LinterConfig,
    baseline: Baseline,
    cwd: &Path,
) -> Box<dyn LintEngine> {
    match config.engine {
        EngineKind::Builtin => Box::new(BuiltinEngine::new(baseline)),
        EngineKind::Eslint => Box::new(EslintEngine::new(
            config.eslint_command.clone(),
            baseline,
            cwd,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_engine_from_config() {
        let mut config = LinterConfig::default();
        let cwd = Path::new("/work");

        let engine = create_engine(&config, Baseline::bundled().unwrap(), cwd);
        assert_eq!(engine.name(), "eslint");

        config.engine = EngineKind::Builtin;
        let engine = create_engine(&config, Baseline::bundled().unwrap(), cwd);
        assert_eq!(engine.name(), "builtin");
    }
}
