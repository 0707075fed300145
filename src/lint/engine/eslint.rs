//! External ESLint engine.
//!
//! Runs ESLint with `--format json` and converts its output into a
//! [`LintReport`]. ESLint's own configuration discovery is disabled; the
//! baseline is passed explicitly so both engines lint against the same rules.
//!
//! The flags are eslintrc-mode flags. ESLint 9 defaults to flat config and
//! rejects them unless `ESLINT_USE_FLAT_CONFIG=false` is set, so the child
//! process always gets that variable.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable that keeps ESLint 9 in eslintrc mode.
pub const FLAT_CONFIG_ENV: &str = "ESLINT_USE_FLAT_CONFIG";

use super::LintEngine;
use crate::error::{OsfLinterError, Result};
use crate::lint::{Baseline, FileResult, LintMessage, LintReport, RuleId, Severity, Span};

/// Delegates linting to an ESLint process.
pub struct EslintEngine {
    command: Vec<String>,
    baseline: Baseline,
    cwd: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EslintFileResult {
    file_path: PathBuf,
    #[serde(default)]
    messages: Vec<EslintMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EslintMessage {
    rule_id: Option<String>,
    severity: u64,
    message: String,
    #[serde(default)]
    fatal: bool,
    line: Option<usize>,
    column: Option<usize>,
    end_line: Option<usize>,
    end_column: Option<usize>,
}

impl From<EslintMessage> for LintMessage {
    fn from(msg: EslintMessage) -> Self {
        let start_line = msg.line.unwrap_or(1);
        let start_col = msg.column.unwrap_or(1);
        // ESLint omits end positions on parse errors.
        let span = Span::new(
            start_line,
            start_col,
            msg.end_line.unwrap_or(start_line),
            msg.end_column.unwrap_or(start_col),
        );
        let severity = Severity::from_level(msg.severity).unwrap_or(Severity::Warning);

        LintMessage {
            rule_id: msg.rule_id.map(RuleId::new),
            severity: if msg.fatal { Severity::Error } else { severity },
            fatal: msg.fatal,
            message: msg.message,
            span,
        }
    }
}

/// Convert ESLint `--format json` output into a report.
pub fn parse_eslint_output(stdout: &str) -> Result<LintReport> {
    let raw: Vec<EslintFileResult> = serde_json::from_str(stdout).map_err(|e| {
        OsfLinterError::lint_run(format!("Unreadable ESLint output: {}", e))
    })?;

    Ok(LintReport::new(
        raw.into_iter()
            .map(|file| {
                FileResult::new(
                    file.file_path,
                    file.messages.into_iter().map(LintMessage::from).collect(),
                )
            })
            .collect(),
    ))
}

impl EslintEngine {
    /// Create an engine that launches `command` from `cwd`.
    pub fn new(command: Vec<String>, baseline: Baseline, cwd: &Path) -> Self {
        Self {
            command,
            baseline,
            cwd: cwd.to_path_buf(),
        }
    }

    /// Arguments passed after the configured command.
    pub fn arguments(&self, files: &[PathBuf]) -> Vec<String> {
        let mut args = vec![
            "--no-eslintrc".to_string(),
            "--format".to_string(),
            "json".to_string(),
            "--rule".to_string(),
            self.baseline.rules_argument(),
        ];
        for option in self.baseline.parser_option_arguments() {
            args.push("--parser-options".to_string());
            args.push(option);
        }
        if let Some(env) = self.baseline.env_argument() {
            args.push("--env".to_string());
            args.push(env);
        }
        args.extend(files.iter().map(|f| f.to_string_lossy().into_owned()));
        args
    }

    /// The ESLint process for `files`, ready to run from the project root.
    pub fn command(&self, files: &[PathBuf]) -> Result<Command> {
        let Some((program, base_args)) = self.command.split_first() else {
            return Err(OsfLinterError::lint_run("eslintCommand is empty"));
        };

        let mut cmd = Command::new(program);
        cmd.args(base_args)
            .args(self.arguments(files))
            .env(FLAT_CONFIG_ENV, "false")
            .current_dir(&self.cwd);
        Ok(cmd)
    }
}

impl LintEngine for EslintEngine {
    fn name(&self) -> &str {
        "eslint"
    }

    fn lint_files(&self, files: &[PathBuf]) -> Result<LintReport> {
        if files.is_empty() {
            return Ok(LintReport::default());
        }

        let mut cmd = self.command(files)?;

        tracing::debug!("Running {} on {} file(s)", self.command.join(" "), files.len());

        let output = cmd.output().map_err(|e| {
            OsfLinterError::lint_run(format!(
                "Cannot start {}: {}",
                cmd.get_program().to_string_lossy(),
                e
            ))
        })?;

        // 0 = clean, 1 = findings; anything else is a crash.
        match output.status.code() {
            Some(0) | Some(1) => parse_eslint_output(&String::from_utf8_lossy(&output.stdout)),
            code => Err(OsfLinterError::lint_run(format!(
                "ESLint exited with {}: {}",
                code.map(|c| c.to_string())
                    .unwrap_or_else(|| "a signal".to_string()),
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
        }
    }
}
