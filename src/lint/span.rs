//! Source location spans.
//!
//! Lines and columns are 1-indexed, matching ESLint's message positions.

/// A source location span representing a range in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Starting line (1-indexed).
    pub start_line: usize,
    /// Starting column (1-indexed).
    pub start_col: usize,
    /// Ending line (1-indexed).
    pub end_line: usize,
    /// Ending column (1-indexed, exclusive).
    pub end_col: usize,
}

impl Span {
    /// Create a span on a single line from `start_col` up to `end_col`.
    pub fn on_line(line: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            start_line: line,
            start_col,
            end_line: line,
            end_col,
        }
    }

    /// Create a zero-width span at a position.
    pub fn point(line: usize, col: usize) -> Self {
        Self::on_line(line, col, col)
    }

    /// Create a span with precise positions.
    pub fn new(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }
}
