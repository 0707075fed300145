//! Result reporting.
//!
//! Turns a [`crate::lint::LintReport`] into the two outputs of a run: the
//! stylish summary for humans and, on request, a JSON annotation file for CI.

pub mod annotation;
pub mod id;
pub mod stylish;
pub mod writer;

pub use annotation::{build_entries, relative_path, AnnotationLevel, ReportEntry};
pub use id::ReportId;
pub use stylish::StylishFormatter;
pub use writer::{report_file_name, write_report};

use crate::lint::LintReport;
use std::io::Write;

/// Trait for formatting lint output.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()>;
}
