//! Visual theme and styling.

use console::Style;

use crate::favorites::FavoriteEntity;

/// Styles used by the command-line front end.
#[derive(Debug, Clone)]
pub struct FavoritesTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for the favorite marker (magenta).
    pub favorite: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for section headers (bold).
    pub header: Style,
}

impl Default for FavoritesTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            favorite: Style::new().magenta(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            favorite: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Colored theme when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a section header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format one favorite as a listing line.
    pub fn format_favorite(&self, entity: &FavoriteEntity) -> String {
        format!(
            "{} {} {}",
            self.favorite.apply_to("♥"),
            entity.title(),
            self.dim.apply_to(format!("[{}] {}", entity.id(), entity.instructor()))
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
