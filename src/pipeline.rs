//! The eslint-client run.
//!
//! [`run`] executes the whole pipeline for one working directory:
//!
//! 1. load `osflinter.config.yml`
//! 2. expand `eslintClientPaths`
//! 3. lint with the baseline rule set
//! 4. on findings, print the stylish summary and optionally write the
//!    JSON report
//!
//! The first failing step ends the run with its error.

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::error::Result;
use crate::exit::{RunOutcome, Stage};
use crate::lint::{create_engine, Baseline, LintReport};
use crate::paths::expand_paths;
use crate::report::{build_entries, write_report, ReportFormatter, ReportId, StylishFormatter};
use crate::ui::UserInterface;

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the config is read from and report paths are relative to.
    pub cwd: PathBuf,
    /// Where to write the JSON report, relative to `cwd` unless absolute.
    pub report_dir: Option<PathBuf>,
    /// Report identifier; a fresh one is generated when `None`.
    pub report_id: Option<ReportId>,
}

impl RunOptions {
    /// Options for a run in `cwd` without a report.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            report_dir: None,
            report_id: None,
        }
    }

    /// Request a JSON report in `dir`.
    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = Some(dir.into());
        self
    }

    /// Use a fixed report identifier.
    pub fn with_report_id(mut self, id: ReportId) -> Self {
        self.report_id = Some(id);
        self
    }
}

fn enter(stage: Stage) {
    tracing::debug!("stage: {}", stage);
}

/// Run the lint pipeline.
///
/// Findings are an [`Ok`] outcome; every `Err` is fatal and should be shown
/// with [`crate::exit::report_error`].
pub fn run(options: &RunOptions, ui: &mut dyn UserInterface) -> Result<RunOutcome> {
    enter(Stage::Start);
    let cwd = std::path::absolute(&options.cwd)?;

    let config = load_config(&cwd)?;
    enter(Stage::ConfigLoaded);

    let files = expand_paths(&cwd, &config.eslint_client_paths)?;
    enter(Stage::FilesExpanded);

    let engine = create_engine(&config, Baseline::bundled()?, &cwd);
    tracing::debug!("Linting {} file(s) with {} engine", files.len(), engine.name());
    let report = engine.lint_files(&files)?;
    enter(Stage::Linted);

    if !report.has_findings() {
        enter(Stage::Done);
        return Ok(RunOutcome::Clean);
    }

    print_stylish(&report, ui)?;

    let report_file = match &options.report_dir {
        Some(dir) => {
            let id = match options.report_id {
                Some(id) => id,
                None => ReportId::new()?,
            };
            Some(write_annotations(&report, &cwd, dir, &id)?)
        }
        None => None,
    };
    enter(Stage::Reported);

    enter(Stage::Done);
    Ok(RunOutcome::Findings {
        error_count: report.error_count(),
        warning_count: report.warning_count(),
        report_file,
    })
}

fn print_stylish(report: &LintReport, ui: &mut dyn UserInterface) -> Result<()> {
    let mut output = Vec::new();
    StylishFormatter::new(ui.theme()).format(report, &mut output)?;
    ui.diagnostics(&String::from_utf8_lossy(&output));
    Ok(())
}

fn write_annotations(report: &LintReport, cwd: &Path, dir: &Path, id: &ReportId) -> Result<PathBuf> {
    let dir = cwd.join(dir);
    let entries = build_entries(report, cwd);
    write_report(&dir, id, &entries)
}
