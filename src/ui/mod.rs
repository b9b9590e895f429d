//! Terminal styling.
//!
//! - [`theme`] - Colour theme, with a plain variant for non-TTY output
//! - [`icons`] - Pass/fail icons for report rows

pub mod icons;
pub mod theme;

pub use icons::StatusKind;
pub use theme::Theme;

/// Whether stdout output should be coloured.
///
/// Colour is off when `--no-color` was given, when `NO_COLOR` is set, or
/// when stdout is not a terminal.
pub fn colors_wanted(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term()
}
