//! Visual theme and styling.

use console::Style;

/// Styles applied to terminal output.
#[derive(Debug, Clone)]
pub struct ExampleTheme {
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for ExampleTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold().for_stderr(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
        }
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }
}

/// Check whether colors should be used on the error stream.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = ExampleTheme::plain();
        assert_eq!(theme.format_error("boom"), "boom");
    }

    #[test]
    fn default_theme_keeps_message_text() {
        let theme = ExampleTheme::new();
        let formatted = theme.format_error("boom");
        assert!(console::strip_ansi_codes(&formatted).contains("boom"));
    }
}
