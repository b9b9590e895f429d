//! Visual theme and styling.

use console::Style;

/// segcheck's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for passing indicators (green).
    pub success: Style,
    /// Style for failing optional indicators (orange).
    pub warning: Style,
    /// Style for failing required indicators (red bold).
    pub error: Style,
    /// Style for secondary text such as purposes and details (dim).
    pub dim: Style,
    /// Style for headers (bold).
    pub header: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default coloured theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY, JSON or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Pick the coloured theme only when colour is wanted.
    pub fn for_output(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }
}
