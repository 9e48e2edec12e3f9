//! Visual theme and styling.

use console::Style;

use crate::store::ThemePreference;

/// Console styles for tempo output.
#[derive(Debug, Clone)]
pub struct ConsoleTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for durations and timestamps (dim).
    pub duration: Style,
}

impl Default for ConsoleTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            duration: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            duration: Style::new(),
        }
    }

    /// Pick styles matching the user's theme preference.
    ///
    /// The dark variant leans on bright accents, the light variant on plain
    /// ones, so output stays readable on both backgrounds.
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::new(),
            ThemePreference::Light => Self {
                info: Style::new().blue(),
                header: Style::new().bold().blue(),
                ..Self::new()
            },
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("! {}", msg)))
    }

    /// Format an error message (icon + text in red).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Whether output should use colors.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_without_escape_codes() {
        let theme = ConsoleTheme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
        assert_eq!(theme.format_error("bad"), "✗ bad");
    }

    #[test]
    fn for_preference_returns_a_theme_per_value() {
        // Styling details are terminal-dependent; both variants must at
        // least construct.
        let _ = ConsoleTheme::for_preference(ThemePreference::Dark);
        let _ = ConsoleTheme::for_preference(ThemePreference::Light);
    }
}
