//! Probe outcomes.
//!
//! A [`ProbeResult`] pairs a declared check with what was found. It is
//! built once per check per run and never changes afterwards.

use super::spec::CheckSpec;
use crate::probe::Detection;
use crate::version::Version;

/// What was found for a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Installed {
    /// Found, with a parseable version.
    Present(Version),

    /// Found, but the reported version could not be parsed.
    Unparseable { raw: String },

    /// Not found, or the detection mechanism failed.
    Absent { reason: String },
}

impl Installed {
    /// Classify a detector's finding.
    pub fn from_detection(detection: Detection) -> Self {
        match detection {
            Detection::Found { raw } => match Version::parse(&raw) {
                Ok(version) => Installed::Present(version),
                Err(_) => Installed::Unparseable { raw },
            },
            Detection::Absent { reason } => Installed::Absent { reason },
        }
    }

    /// The parsed version, if any.
    pub fn version(&self) -> Option<&Version> {
        match self {
            Installed::Present(version) => Some(version),
            _ => None,
        }
    }

    /// Stable lowercase label (`present`, `unparseable`, `absent`).
    pub fn label(&self) -> &'static str {
        match self {
            Installed::Present(_) => "present",
            Installed::Unparseable { .. } => "unparseable",
            Installed::Absent { .. } => "absent",
        }
    }
}

/// Outcome of probing one declared check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult<'a> {
    spec: &'a CheckSpec,
    installed: Installed,
    satisfied: bool,
}

impl<'a> ProbeResult<'a> {
    /// Compare what was found against the check's requirement.
    pub fn new(spec: &'a CheckSpec, installed: Installed) -> Self {
        let satisfied = installed
            .version()
            .is_some_and(|v| v.satisfies(&spec.required_version));
        Self {
            spec,
            installed,
            satisfied,
        }
    }

    /// The originating check.
    pub fn spec(&self) -> &'a CheckSpec {
        self.spec
    }

    /// What was found.
    pub fn installed(&self) -> &Installed {
        &self.installed
    }

    /// Whether the installed version meets the requirement.
    pub fn satisfied(&self) -> bool {
        self.satisfied
    }

    /// Why an unsatisfied check failed, for verbose output.
    pub fn failure_detail(&self) -> Option<String> {
        if self.satisfied {
            return None;
        }
        Some(match &self.installed {
            Installed::Present(_) => "older than required".to_string(),
            Installed::Unparseable { raw } => format!("unrecognized version '{}'", raw),
            Installed::Absent { reason } => format!("not found: {}", reason),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(required: &str) -> CheckSpec {
        CheckSpec::required("numpy", Version::parse(required).unwrap())
    }

    #[test]
    fn classifies_parseable_version() {
        let installed = Installed::from_detection(Detection::found("1.7.1"));
        assert_eq!(installed.label(), "present");
        assert_eq!(installed.version().unwrap().to_string(), "1.7.1");
    }

    #[test]
    fn classifies_unparseable_version() {
        let installed = Installed::from_detection(Detection::found("unknown"));
        assert_eq!(
            installed,
            Installed::Unparseable {
                raw: "unknown".to_string()
            }
        );
    }

    #[test]
    fn classifies_absent() {
        let installed = Installed::from_detection(Detection::absent("not importable"));
        assert_eq!(installed.label(), "absent");
        assert!(installed.version().is_none());
    }

    #[test]
    fn newer_version_is_satisfied() {
        let spec = spec("1.7");
        let result = ProbeResult::new(&spec, Installed::Present(Version::parse("1.7.1").unwrap()));
        assert!(result.satisfied());
        assert!(result.failure_detail().is_none());
    }

    #[test]
    fn equal_version_is_satisfied() {
        let spec = spec("1.7");
        let result = ProbeResult::new(&spec, Installed::Present(Version::parse("1.7").unwrap()));
        assert!(result.satisfied());
    }

    #[test]
    fn older_version_is_not_satisfied() {
        let spec = spec("1.7");
        let result = ProbeResult::new(&spec, Installed::Present(Version::parse("1.6.2").unwrap()));
        assert!(!result.satisfied());
        assert_eq!(result.failure_detail().unwrap(), "older than required");
    }

    #[test]
    fn unparseable_is_never_satisfied() {
        let spec = spec("0");
        let result = ProbeResult::new(
            &spec,
            Installed::Unparseable {
                raw: "dev".to_string(),
            },
        );
        assert!(!result.satisfied());
        assert_eq!(
            result.failure_detail().unwrap(),
            "unrecognized version 'dev'"
        );
    }

    #[test]
    fn absent_is_never_satisfied() {
        let spec = spec("0");
        let result = ProbeResult::new(
            &spec,
            Installed::Absent {
                reason: "no module named numpy".to_string(),
            },
        );
        assert!(!result.satisfied());
        assert!(result
            .failure_detail()
            .unwrap()
            .starts_with("not found: "));
    }
}
