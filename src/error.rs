//! Error types for osflinter operations.
//!
//! This module defines [`OsfLinterError`], the error type returned by every
//! pipeline step, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is fatal for a run; nothing is retried or downgraded
//! - [`OsfLinterError::kind`] groups variants into configuration, execution
//!   and report failures
//! - [`OsfLinterError::detail`] carries the underlying cause, printed on the
//!   line after the headline
//! - Lint findings are not errors; they are reported through
//!   [`crate::exit::RunOutcome`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for osflinter operations.
#[derive(Debug, Error)]
pub enum OsfLinterError {
    /// No configuration file in the working directory.
    #[error("{} does not exist!", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The configuration file could not be read or parsed.
    #[error("Failed to import {}!", path.display())]
    ConfigImport { path: PathBuf, message: String },

    /// The configuration document is empty or falsy.
    #[error("Failed to import {}!", path.display())]
    ConfigEmpty { path: PathBuf },

    /// The configuration has no `eslintClientPaths`.
    #[error("Missing eslintClientPaths configuration from {}!", path.display())]
    MissingLintPaths { path: PathBuf },

    /// Path expansion or the lint engine failed.
    #[error("Failed to run eslintClient!")]
    LintRun { message: String },

    /// The computed report file already exists.
    #[error("reportFile={} already exists!", path.display())]
    ReportExists { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Broad classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing file, unparsable file, empty export, missing field.
    Configuration,
    /// Glob or lint engine failure.
    Execution,
    /// Report destination problems.
    Report,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "configuration"),
            ErrorKind::Execution => write!(f, "execution"),
            ErrorKind::Report => write!(f, "report"),
        }
    }
}

impl OsfLinterError {
    /// Shorthand for a [`OsfLinterError::LintRun`] failure.
    pub fn lint_run(message: impl Into<String>) -> Self {
        Self::LintRun {
            message: message.into(),
        }
    }

    /// Which class of failure this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigImport { .. }
            | Self::ConfigEmpty { .. }
            | Self::MissingLintPaths { .. } => ErrorKind::Configuration,
            Self::LintRun { .. } | Self::Other(_) => ErrorKind::Execution,
            Self::ReportExists { .. } | Self::Io(_) => ErrorKind::Report,
        }
    }

    /// Underlying cause, shown below the headline when present.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ConfigImport { message, .. } | Self::LintRun { message } => Some(message),
            _ => None,
        }
    }
}

/// Result type alias for osflinter operations.
pub type Result<T> = std::result::Result<T, OsfLinterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = OsfLinterError::ConfigNotFound {
            path: PathBuf::from("/work/osflinter.config.yml"),
        };
        assert_eq!(
            err.to_string(),
            "/work/osflinter.config.yml does not exist!"
        );
    }

    #[test]
    fn config_import_keeps_parser_message_as_detail() {
        let err = OsfLinterError::ConfigImport {
            path: PathBuf::from("/work/osflinter.config.yml"),
            message: "mapping values are not allowed".into(),
        };
        assert_eq!(err.to_string(), "Failed to import /work/osflinter.config.yml!");
        assert_eq!(err.detail(), Some("mapping values are not allowed"));
    }

    #[test]
    fn missing_lint_paths_names_field() {
        let err = OsfLinterError::MissingLintPaths {
            path: PathBuf::from("cfg.yml"),
        };
        assert!(err.to_string().contains("eslintClientPaths"));
        assert!(err.to_string().contains("cfg.yml"));
    }

    #[test]
    fn report_exists_displays_path() {
        let err = OsfLinterError::ReportExists {
            path: PathBuf::from("/out/ESLintClient.x.json"),
        };
        assert_eq!(
            err.to_string(),
            "reportFile=/out/ESLintClient.x.json already exists!"
        );
    }

    #[test]
    fn kinds_follow_taxonomy() {
        let config = OsfLinterError::ConfigEmpty {
            path: PathBuf::from("a"),
        };
        let run = OsfLinterError::lint_run("boom");
        let report = OsfLinterError::ReportExists {
            path: PathBuf::from("b"),
        };
        assert_eq!(config.kind(), ErrorKind::Configuration);
        assert_eq!(run.kind(), ErrorKind::Execution);
        assert_eq!(report.kind(), ErrorKind::Report);
        assert_eq!(run.detail(), Some("boom"));
        assert!(report.detail().is_none());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: OsfLinterError = io_err.into();
        assert!(matches!(err, OsfLinterError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Report);
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(OsfLinterError::lint_run("test"))
        }
        assert!(returns_error().is_err());
    }
}
