//! Text rendering of compliance reports.
//!
//! ```text
//! Module  Required  Installed
//! Python  v2.7      v2.7.5     ✓
//! numpy   v1.7      none       ✗
//!
//! Optional:
//! cython  v0.19     v0.25      ✓ (for some optimized libraries)
//!
//! 1 required dependency not satisfied.
//! ```
//!
//! Columns are padded to the widest cell across both sections. Padding is
//! applied before styling so colour codes never disturb alignment.

use super::Report;
use crate::check::{Installed, ProbeResult};
use crate::ui::{StatusKind, Theme};
use console::{measure_text_width, pad_str, Alignment};

/// Placeholder shown in the installed column for absent components.
pub const ABSENT_PLACEHOLDER: &str = "none";

/// Gap between columns.
const GUTTER: &str = "  ";

const NAME_HEADER: &str = "Module";
const REQUIRED_HEADER: &str = "Required";
const INSTALLED_HEADER: &str = "Installed";
const OPTIONAL_HEADING: &str = "Optional:";

/// Plain cell text for one row, before padding and styling.
struct Row<'r> {
    name: &'r str,
    required: String,
    installed: String,
    status: StatusKind,
    purpose: Option<&'r str>,
    detail: Option<String>,
}

impl<'r> Row<'r> {
    fn from_result(result: &'r ProbeResult<'_>) -> Self {
        let spec = result.spec();
        let installed = match result.installed() {
            Installed::Present(version) => format!("v{}", version),
            Installed::Unparseable { raw } => raw.clone(),
            Installed::Absent { .. } => ABSENT_PLACEHOLDER.to_string(),
        };
        Self {
            name: &spec.name,
            required: format!("v{}", spec.required_version),
            installed,
            status: StatusKind::for_row(result.satisfied(), spec.is_required()),
            purpose: if spec.is_required() {
                None
            } else {
                spec.purpose.as_deref()
            },
            detail: result.failure_detail(),
        }
    }
}

struct Widths {
    name: usize,
    required: usize,
    installed: usize,
}

impl Widths {
    fn measure(rows: &[&Row<'_>]) -> Self {
        Self {
            name: widest(NAME_HEADER, rows.iter().map(|row| row.name)),
            required: widest(
                REQUIRED_HEADER,
                rows.iter().map(|row| row.required.as_str()),
            ),
            installed: widest(
                INSTALLED_HEADER,
                rows.iter().map(|row| row.installed.as_str()),
            ),
        }
    }
}

fn widest<'c>(header: &str, cells: impl Iterator<Item = &'c str>) -> usize {
    cells
        .map(measure_text_width)
        .chain(std::iter::once(measure_text_width(header)))
        .max()
        .unwrap_or(0)
}

fn pad(text: &str, width: usize) -> String {
    pad_str(text, width, Alignment::Left, None).into_owned()
}

/// Renders a [`Report`] as an aligned text table.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    theme: Theme,
    verbose: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(Theme::plain())
    }
}

impl TextRenderer {
    /// Create a renderer with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            verbose: false,
        }
    }

    /// Append why each failing row failed.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Render the full report, ending with a newline.
    pub fn render(&self, report: &Report<'_>) -> String {
        let required: Vec<Row<'_>> = report.required().map(Row::from_result).collect();
        let optional: Vec<Row<'_>> = report.optional().map(Row::from_result).collect();

        let all: Vec<&Row<'_>> = required.iter().chain(optional.iter()).collect();
        let widths = Widths::measure(&all);

        let mut out = String::new();
        let header = format!(
            "{}{}{}{}{}",
            pad(NAME_HEADER, widths.name),
            GUTTER,
            pad(REQUIRED_HEADER, widths.required),
            GUTTER,
            INSTALLED_HEADER
        );
        out.push_str(&self.theme.header.apply_to(header).to_string());
        out.push('\n');

        for row in &required {
            out.push_str(&self.render_row(row, &widths));
            out.push('\n');
        }

        if !optional.is_empty() {
            out.push('\n');
            out.push_str(&self.theme.header.apply_to(OPTIONAL_HEADING).to_string());
            out.push('\n');
            for row in &optional {
                out.push_str(&self.render_row(row, &widths));
                out.push('\n');
            }
        }

        out.push('\n');
        out.push_str(&self.render_summary(report));
        out.push('\n');
        out
    }

    fn render_row(&self, row: &Row<'_>, widths: &Widths) -> String {
        let mut line = format!(
            "{}{}{}{}{}{}{}",
            pad(row.name, widths.name),
            GUTTER,
            pad(&row.required, widths.required),
            GUTTER,
            pad(&row.installed, widths.installed),
            GUTTER,
            row.status.styled(&self.theme)
        );

        if let Some(purpose) = row.purpose {
            line.push_str(&format!(" ({})", purpose));
        }

        if self.verbose {
            if let Some(detail) = &row.detail {
                let detail = format!("[{}]", detail);
                line.push(' ');
                line.push_str(&self.theme.dim.apply_to(detail).to_string());
            }
        }

        line
    }

    fn render_summary(&self, report: &Report<'_>) -> String {
        match report.failed_required() {
            0 => self
                .theme
                .success
                .apply_to("All required dependencies satisfied.")
                .to_string(),
            n => {
                let noun = if n == 1 { "dependency" } else { "dependencies" };
                self.theme
                    .error
                    .apply_to(format!("{} required {} not satisfied.", n, noun))
                    .to_string()
            }
        }
    }
}
