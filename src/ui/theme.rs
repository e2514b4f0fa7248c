//! Visual theme and styling.

use console::Style;

/// Styles for depswarm output.
#[derive(Debug, Clone)]
pub struct DeployTheme {
    /// Style for command lines (bold).
    pub command: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for secondary text (dim).
    pub dim: Style,
}

impl Default for DeployTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DeployTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            command: Style::new().bold(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without styling.
    pub fn plain() -> Self {
        Self {
            command: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a command line (`-- ` prefix, command in bold).
    pub fn format_command(&self, command: &str) -> String {
        format!(
            "{}{}",
            self.dim.apply_to("-- "),
            self.command.apply_to(command)
        )
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("[WARNING] {}", msg)))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("[ERROR] {}", msg)))
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
