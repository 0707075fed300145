//! Visual theme and styling.

use console::Style;

/// osflinter's visual theme.
///
/// Colors follow ESLint's stylish formatter so the output looks familiar
/// next to other lint tools.
#[derive(Debug, Clone)]
pub struct OsfLinterTheme {
    /// Style for error labels and the failure icon (red bold).
    pub error: Style,
    /// Style for the `error` severity column (red).
    pub error_label: Style,
    /// Style for the `warning` severity column (yellow).
    pub warning_label: Style,
    /// Style for the summary line when only warnings were found (yellow bold).
    pub warning_summary: Style,
    /// Style for file paths (underlined).
    pub path: Style,
    /// Style for positions and rule ids (dim).
    pub dim: Style,
    /// Style for rule ids in listings (bold).
    pub key: Style,
}

impl Default for OsfLinterTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl OsfLinterTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
            error_label: Style::new().red(),
            warning_label: Style::new().yellow(),
            warning_summary: Style::new().yellow().bold(),
            path: Style::new().underlined(),
            dim: Style::new().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            error_label: Style::new(),
            warning_label: Style::new(),
            warning_summary: Style::new(),
            path: Style::new(),
            dim: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a fatal message: red bold icon, plain text.
    pub fn format_failure(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✖"), msg)
    }
}

/// Check if colors should be enabled for diagnostics.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Diagnostics go to stderr, so that is the stream that matters
    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_failure() {
        let theme = OsfLinterTheme::plain();
        assert_eq!(
            theme.format_failure("reportFile=x already exists!"),
            "✖ reportFile=x already exists!"
        );
    }

    #[test]
    fn plain_theme_does_not_style() {
        let theme = OsfLinterTheme::plain();
        assert_eq!(theme.path.apply_to("/a.js").to_string(), "/a.js");
        assert_eq!(theme.dim.apply_to("no-var").to_string(), "no-var");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = OsfLinterTheme::default();
        let new = OsfLinterTheme::new();
        assert_eq!(default.format_failure("test"), new.format_failure("test"));
    }
}
