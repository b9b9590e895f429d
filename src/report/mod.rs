//! Compliance reports.
//!
//! A [`Report`] groups probe results into required and optional sections and
//! computes the overall verdict: the run passes iff every required check is
//! satisfied. Optional checks never affect the verdict.
//!
//! # Modules
//!
//! - [`render`] - Aligned text table
//! - [`json`] - Machine-readable JSON document

pub mod json;
pub mod render;

pub use json::to_json;
pub use render::TextRenderer;

use crate::check::ProbeResult;
use chrono::{DateTime, Utc};

/// Outcome of one check pass.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    results: Vec<ProbeResult<'a>>,
    checked_at: DateTime<Utc>,
}

impl<'a> Report<'a> {
    /// Build a report from results in declaration order.
    pub fn new(results: Vec<ProbeResult<'a>>) -> Self {
        Self {
            results,
            checked_at: Utc::now(),
        }
    }

    /// All results in declaration order.
    pub fn results(&self) -> &[ProbeResult<'a>] {
        &self.results
    }

    /// Results of required checks, in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &ProbeResult<'a>> {
        self.results.iter().filter(|r| r.spec().is_required())
    }

    /// Results of optional checks, in declaration order.
    pub fn optional(&self) -> impl Iterator<Item = &ProbeResult<'a>> {
        self.results.iter().filter(|r| !r.spec().is_required())
    }

    /// Number of required checks that are not satisfied.
    pub fn failed_required(&self) -> usize {
        self.required().filter(|r| !r.satisfied()).count()
    }

    /// Overall verdict: every required check is satisfied.
    pub fn passed(&self) -> bool {
        self.failed_required() == 0
    }

    /// Process exit code for the verdict (0 pass, 1 fail).
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    /// When the pass was run.
    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{CheckSpec, Installed};
    use crate::version::Version;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn absent() -> Installed {
        Installed::Absent {
            reason: "not installed".to_string(),
        }
    }

    #[test]
    fn all_required_satisfied_passes() {
        let specs = [
            CheckSpec::required("Python", v("2.7")),
            CheckSpec::required("numpy", v("1.7")),
        ];
        let report = Report::new(vec![
            ProbeResult::new(&specs[0], Installed::Present(v("2.7.5"))),
            ProbeResult::new(&specs[1], Installed::Present(v("1.7.1"))),
        ]);
        assert!(report.passed());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn absent_required_fails() {
        let specs = [
            CheckSpec::required("Python", v("2.7")),
            CheckSpec::required("numpy", v("1.7")),
        ];
        let report = Report::new(vec![
            ProbeResult::new(&specs[0], Installed::Present(v("2.7.5"))),
            ProbeResult::new(&specs[1], absent()),
        ]);
        assert!(!report.passed());
        assert_eq!(report.failed_required(), 1);
        assert_ne!(report.exit_code(), 0);
    }

    #[test]
    fn unparseable_required_fails_even_with_optional_present() {
        let specs = [
            CheckSpec::required("scipy", v("0.12")),
            CheckSpec::optional("cython", v("0.19"), "for some optimized libraries"),
        ];
        let report = Report::new(vec![
            ProbeResult::new(
                &specs[0],
                Installed::Unparseable {
                    raw: "dev".to_string(),
                },
            ),
            ProbeResult::new(&specs[1], Installed::Present(v("0.25"))),
        ]);
        assert!(!report.passed());
    }

    #[test]
    fn optional_failures_never_fail() {
        let specs = [
            CheckSpec::required("Python", v("2.7")),
            CheckSpec::optional("h5py", v("2.0"), "for loading MATLAB v7.3 files"),
            CheckSpec::optional("psutil", v("2.0"), "for task resource monitoring"),
        ];
        let report = Report::new(vec![
            ProbeResult::new(&specs[0], Installed::Present(v("3.8.10"))),
            ProbeResult::new(&specs[1], absent()),
            ProbeResult::new(&specs[2], Installed::Present(v("1.2.1"))),
        ]);
        assert!(report.passed());
        assert_eq!(report.optional().count(), 2);
        assert_eq!(report.required().count(), 1);
    }

    #[test]
    fn empty_report_passes() {
        let report = Report::new(Vec::new());
        assert!(report.passed());
    }
}
