//! Status vocabulary for report rows.

use super::theme::Theme;

/// Outcome of one report row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// The installed version meets the requirement.
    Passed,
    /// A required component is missing or too old.
    Failed,
    /// An optional component is missing or too old.
    Degraded,
}

impl StatusKind {
    /// Pick the status for a row.
    pub fn for_row(satisfied: bool, required: bool) -> Self {
        match (satisfied, required) {
            (true, _) => Self::Passed,
            (false, true) => Self::Failed,
            (false, false) => Self::Degraded,
        }
    }

    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Passed => "✓",
            Self::Failed | Self::Degraded => "✗",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Passed => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Degraded => theme.warning.apply_to(icon).to_string(),
        }
    }
}
