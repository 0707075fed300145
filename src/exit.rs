//! Run outcomes and exit codes.
//!
//! A run ends in exactly one of three ways: clean, with findings, or with an
//! [`OsfLinterError`]. Only a clean run exits 0.

use std::fmt;
use std::path::PathBuf;

use crate::error::{OsfLinterError, Result};
use crate::ui::UserInterface;

/// Pipeline stages, in order. Any stage may fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    ConfigLoaded,
    FilesExpanded,
    Linted,
    Reported,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::ConfigLoaded => "config-loaded",
            Stage::FilesExpanded => "files-expanded",
            Stage::Linted => "linted",
            Stage::Reported => "reported",
            Stage::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// How a completed run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No warnings or errors.
    Clean,
    /// At least one warning or error was found.
    Findings {
        error_count: usize,
        warning_count: usize,
        /// Report file written for this run, if one was requested.
        report_file: Option<PathBuf>,
    },
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Clean => 0,
            RunOutcome::Findings { .. } => 1,
        }
    }

    /// Whether the run found nothing.
    pub fn is_clean(&self) -> bool {
        matches!(self, RunOutcome::Clean)
    }
}

/// Print a fatal error the way every failure is shown.
pub fn report_error(ui: &mut dyn UserInterface, err: &OsfLinterError) {
    tracing::debug!("Run failed ({} error): {:?}", err.kind(), err);
    ui.error(&err.to_string());
    if let Some(detail) = err.detail() {
        ui.detail(detail);
    }
}

/// Exit code for a finished run, printing the error when there is one.
pub fn finish(result: Result<RunOutcome>, ui: &mut dyn UserInterface) -> i32 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            report_error(ui, &err);
            1
        }
    }
}
