//! ESLint client command implementation.
//!
//! The `osflinter eslint-client` command runs the lint pipeline for the
//! project root and maps its outcome to an exit code.

use std::path::{Path, PathBuf};

use crate::cli::args::EslintClientArgs;
use crate::error::Result;
use crate::exit;
use crate::pipeline::{self, RunOptions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The eslint-client command implementation.
pub struct EslintClientCommand {
    project_root: PathBuf,
    args: EslintClientArgs,
}

impl EslintClientCommand {
    /// Create a new eslint-client command.
    pub fn new(project_root: &Path, args: EslintClientArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &EslintClientArgs {
        &self.args
    }

    fn options(&self) -> RunOptions {
        let options = RunOptions::new(&self.project_root);
        match &self.args.report {
            Some(dir) => options.with_report_dir(dir),
            None => options,
        }
    }
}

impl Command for EslintClientCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = pipeline::run(&self.options(), ui);
        match exit::finish(result, ui) {
            0 => Ok(CommandResult::success()),
            code => Ok(CommandResult::failure(code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("osflinter.config.yml"), config).unwrap();
        temp
    }

    #[test]
    fn clean_run_succeeds() {
        let temp = setup_project("engine: builtin\neslintClientPaths: [\"*.js\"]\n");
        fs::write(temp.path().join("ok.js"), "const ok = true;\nexport default ok;\n").unwrap();
        let mut ui = MockUI::new();

        let result = EslintClientCommand::new(temp.path(), EslintClientArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.stderr_is_empty());
    }

    #[test]
    fn findings_fail_with_exit_one() {
        let temp = setup_project("engine: builtin\neslintClientPaths: [\"*.js\"]\n");
        fs::write(temp.path().join("bad.js"), "if (a == b) {}\n").unwrap();
        let mut ui = MockUI::new();

        let result = EslintClientCommand::new(temp.path(), EslintClientArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.diagnostic_blocks()[0].contains("eqeqeq"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn errors_are_printed_not_returned() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = EslintClientCommand::new(temp.path(), EslintClientArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        let expected = format!(
            "{} does not exist!",
            temp.path().join("osflinter.config.yml").display()
        );
        assert!(ui.has_error(&expected));
    }

    #[test]
    fn invalid_config_prints_parser_detail() {
        let temp = setup_project("eslintClientPaths: [unclosed\n");
        let mut ui = MockUI::new();

        let result = EslintClientCommand::new(temp.path(), EslintClientArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].starts_with("Failed to import "));
        assert_eq!(ui.details().len(), 1);
    }

    #[test]
    fn report_dir_is_passed_through() {
        let temp = setup_project("engine: builtin\neslintClientPaths: [\"*.js\"]\n");
        fs::write(temp.path().join("bad.js"), "eval(x);\n").unwrap();
        let mut ui = MockUI::new();
        let args = EslintClientArgs {
            report: Some(PathBuf::from("reports")),
        };

        let result = EslintClientCommand::new(temp.path(), args)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(fs::read_dir(temp.path().join("reports")).unwrap().count(), 1);
    }
}
