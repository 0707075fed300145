//! Stylish output formatter.
//!
//! Renders a [`LintReport`] the way ESLint's `stylish` formatter does: each
//! file with messages gets an underlined path and an aligned table of
//! findings, followed by a one-line problem summary.

use std::io::Write;

use console::measure_text_width;

use super::ReportFormatter;
use crate::lint::{LintMessage, LintReport};
use crate::ui::OsfLinterTheme;

/// Formats lint output for the terminal.
pub struct StylishFormatter<'a> {
    theme: &'a OsfLinterTheme,
}

struct Row<'m> {
    line: String,
    column: String,
    error: bool,
    message: &'m str,
    rule: &'m str,
}

impl<'a> StylishFormatter<'a> {
    /// Create a formatter using `theme` for colors.
    pub fn new(theme: &'a OsfLinterTheme) -> Self {
        Self { theme }
    }

    fn row(msg: &LintMessage) -> Row<'_> {
        Row {
            line: msg.span.start_line.to_string(),
            column: msg.span.start_col.to_string(),
            error: msg.is_error(),
            message: trim_period(&msg.message),
            rule: msg.rule_id.as_ref().map(|id| id.as_str()).unwrap_or(""),
        }
    }

    fn write_table<W: Write>(&self, rows: &[Row<'_>], writer: &mut W) -> std::io::Result<()> {
        let line_width = rows.iter().map(|r| r.line.len()).max().unwrap_or(0);
        let column_width = rows.iter().map(|r| r.column.len()).max().unwrap_or(0);
        let label_width = if rows.iter().any(|r| !r.error) {
            "warning".len()
        } else {
            "error".len()
        };
        let message_width = rows
            .iter()
            .map(|r| measure_text_width(r.message))
            .max()
            .unwrap_or(0);

        for row in rows {
            let position = format!(
                "{:>lw$}:{:<cw$}",
                row.line,
                row.column,
                lw = line_width,
                cw = column_width
            );
            let label = format!(
                "{:<width$}",
                if row.error { "error" } else { "warning" },
                width = label_width
            );
            let label = if row.error {
                self.theme.error_label.apply_to(label)
            } else {
                self.theme.warning_label.apply_to(label)
            };

            if row.rule.is_empty() {
                writeln!(
                    writer,
                    "  {}  {}  {}",
                    self.theme.dim.apply_to(position),
                    label,
                    row.message
                )?;
            } else {
                let padding = message_width - measure_text_width(row.message);
                writeln!(
                    writer,
                    "  {}  {}  {}{}  {}",
                    self.theme.dim.apply_to(position),
                    label,
                    row.message,
                    " ".repeat(padding),
                    self.theme.dim.apply_to(row.rule)
                )?;
            }
        }
        Ok(())
    }
}

impl ReportFormatter for StylishFormatter<'_> {
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()> {
        let total = report.message_count();
        if total == 0 {
            return Ok(());
        }

        writeln!(writer)?;
        for result in report.results.iter().filter(|r| !r.messages.is_empty()) {
            writeln!(
                writer,
                "{}",
                self.theme.path.apply_to(result.file_path.display())
            )?;
            let rows: Vec<Row<'_>> = result.messages.iter().map(Self::row).collect();
            self.write_table(&rows, writer)?;
            writeln!(writer)?;
        }

        let errors = report.error_count();
        let warnings = report.warning_count();
        let summary = format!(
            "✖ {} ({}, {})",
            plural(total, "problem"),
            plural(errors, "error"),
            plural(warnings, "warning")
        );
        let style = if errors > 0 {
            &self.theme.error
        } else {
            &self.theme.warning_summary
        };
        writeln!(writer, "{}", style.apply_to(summary))
    }
}

/// Drop a sentence-ending period, as ESLint does in this view.
fn trim_period(message: &str) -> &str {
    match message.strip_suffix('.') {
        Some(rest) if !rest.is_empty() && !rest.ends_with(' ') => rest,
        _ => message,
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}
