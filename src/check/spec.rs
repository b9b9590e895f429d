//! Declared dependency checks.

use crate::probe::ProbeSpec;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a failing check fails the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Missing or outdated fails the overall verdict.
    #[default]
    Required,
    /// Unlocks extra functionality; never fails the verdict.
    Optional,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Required => write!(f, "required"),
            Category::Optional => write!(f, "optional"),
        }
    }
}

/// One declared dependency check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSpec {
    /// Component name as shown in the report (`Python`, `numpy`).
    pub name: String,
    /// Minimum acceptable version.
    pub required_version: Version,
    /// Required or optional.
    pub category: Category,
    /// What an optional component enables. Only rendered for optional checks.
    pub purpose: Option<String>,
    /// Explicit detection strategy, overriding the registry.
    pub probe: Option<ProbeSpec>,
}

impl CheckSpec {
    /// A required check probed through the registry.
    pub fn required(name: &str, version: Version) -> Self {
        Self {
            name: name.to_string(),
            required_version: version,
            category: Category::Required,
            purpose: None,
            probe: None,
        }
    }

    /// An optional check probed through the registry.
    pub fn optional(name: &str, version: Version, purpose: &str) -> Self {
        Self {
            name: name.to_string(),
            required_version: version,
            category: Category::Optional,
            purpose: Some(purpose.to_string()),
            probe: None,
        }
    }

    /// Use `probe` instead of the registry's strategy.
    pub fn with_probe(mut self, probe: ProbeSpec) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Whether this check can fail the overall verdict.
    pub fn is_required(&self) -> bool {
        self.category == Category::Required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_defaults_to_required() {
        assert_eq!(Category::default(), Category::Required);
    }

    #[test]
    fn category_deserializes_lowercase() {
        let category: Category = serde_yaml::from_str("optional").unwrap();
        assert_eq!(category, Category::Optional);
        assert!(serde_yaml::from_str::<Category>("sometimes").is_err());
    }

    #[test]
    fn constructors_set_category() {
        let v = Version::from_components(vec![1, 7]);
        assert!(CheckSpec::required("numpy", v.clone()).is_required());

        let optional = CheckSpec::optional("h5py", v, "for loading MATLAB v7.3 files");
        assert!(!optional.is_required());
        assert_eq!(
            optional.purpose.as_deref(),
            Some("for loading MATLAB v7.3 files")
        );
    }
}
