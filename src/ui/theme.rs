//! Visual theme and styling.

use console::Style;

use super::StatusKind;

/// Visual theme for form output.
#[derive(Debug, Clone)]
pub struct FormTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages and the error banner (red bold).
    pub error: Style,
    /// Style for the active step (sky blue).
    pub active: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (blue bold).
    pub header: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
    /// Style for inline field messages (red).
    pub field_error: Style,
}

impl Default for FormTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FormTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            active: Style::new().color256(32).bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().color256(32),
            border: Style::new().dim(),
            hint: Style::new().cyan().dim(),
            field_error: Style::new().red(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            active: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
            field_error: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        let line = format!("{} {}", StatusKind::Success.icon(), msg);
        self.success.apply_to(line).to_string()
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        let line = format!("{} {}", StatusKind::Warning.icon(), msg);
        self.warning.apply_to(line).to_string()
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        let line = format!("{} {}", StatusKind::Failed.icon(), msg);
        self.error.apply_to(line).to_string()
    }

    /// Format the inline message under a field.
    pub fn format_field_error(&self, label: &str, msg: &str) -> String {
        format!(
            "  {} {}",
            self.field_error.apply_to("↳"),
            self.field_error.apply_to(format!("{}: {}", label, msg))
        )
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▌"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = FormTheme::plain().format_success("Submitted");
        assert_eq!(msg, "✓ Submitted");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = FormTheme::plain().format_warning("Careful");
        assert_eq!(msg, "⚠ Careful");
    }

    #[test]
    fn theme_formats_error() {
        let msg = FormTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_field_error() {
        let msg = FormTheme::plain().format_field_error("First name", "First name is required");
        assert_eq!(msg, "  ↳ First name: First name is required");
    }

    #[test]
    fn theme_formats_header() {
        let msg = FormTheme::plain().format_header("Address");
        assert!(msg.contains("Address"));
        assert!(msg.contains('▌'));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = FormTheme::default();
        let new = FormTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
