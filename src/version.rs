//! Version values and ordering.
//!
//! A [`Version`] is a sequence of non-negative integer components with an
//! optional non-numeric suffix (`2.7.5`, `1.7.0rc1`, `v0.25`). Versions form
//! a total order:
//!
//! 1. Components compare left to right, a missing trailing component
//!    counts as zero.
//! 2. If still equal, the longer sequence is greater (`2.7 < 2.7.0`).
//! 3. If still equal, the suffix decides: pre-release < release < post-release,
//!    and suffixes of the same rank compare lexicographically.
//!
//! # Example
//!
//! ```
//! use segcheck::version::Version;
//!
//! let installed: Version = "2.7.5".parse().unwrap();
//! let required: Version = "v2.7".parse().unwrap();
//! assert!(installed.satisfies(&required));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::CheckerError;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[vV]?(\d+(?:\.\d+)*)(.*)$").unwrap());

/// How a suffix ranks against the bare release it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SuffixRank {
    PreRelease,
    Release,
    PostRelease,
}

/// A parsed, totally ordered version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    components: Vec<u64>,
    suffix: Option<String>,
}

impl Version {
    /// Build a version from numeric components with no suffix.
    pub fn from_components(components: Vec<u64>) -> Self {
        Self {
            components,
            suffix: None,
        }
    }

    /// Parse a version string.
    pub fn parse(input: &str) -> Result<Self, CheckerError> {
        let trimmed = input.trim();
        let invalid = || CheckerError::InvalidVersion {
            version: input.to_string(),
        };

        let caps = VERSION_PATTERN.captures(trimmed).ok_or_else(invalid)?;
        let components = caps[1]
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;

        let rest = &caps[2];
        // Whitespace after the number means trailing prose, not a suffix.
        if rest.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let suffix = (!rest.is_empty()).then(|| rest.to_string());

        Ok(Self { components, suffix })
    }

    /// Numeric components, most significant first.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Non-numeric suffix, if any (`rc1`, `.post2`, `+local`).
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Whether this version meets the `required` minimum.
    pub fn satisfies(&self, required: &Version) -> bool {
        self >= required
    }

    fn suffix_rank(&self) -> SuffixRank {
        match self.suffix.as_deref() {
            None => SuffixRank::Release,
            Some(s) if s.starts_with('+') => SuffixRank::PostRelease,
            Some(s) => {
                let label = s.trim_start_matches(['.', '-', '_']).to_ascii_lowercase();
                if label.starts_with("post") {
                    SuffixRank::PostRelease
                } else {
                    SuffixRank::PreRelease
                }
            }
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.components.len().max(other.components.len());
        for i in 0..width {
            let a = self.components.get(i).copied().unwrap_or(0);
            let b = other.components.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }

        self.components
            .len()
            .cmp(&other.components.len())
            .then_with(|| self.suffix_rank().cmp(&other.suffix_rank()))
            .then_with(|| self.suffix.cmp(&other.suffix))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = CheckerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .components
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", joined)?;
        if let Some(suffix) = &self.suffix {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn version_pattern_compiles() {
        assert!(VERSION_PATTERN.is_match("v2.7.5rc1"));
        assert!(!VERSION_PATTERN.is_match("newest"));
    }

    #[test]
    fn parses_plain_versions() {
        assert_eq!(v("2.7.5").components(), &[2, 7, 5]);
        assert_eq!(v("1").components(), &[1]);
        assert!(v("2.7.5").suffix().is_none());
    }

    #[test]
    fn strips_leading_v() {
        assert_eq!(v("v0.25"), v("0.25"));
        assert_eq!(v("V1.7"), v("1.7"));
    }

    #[test]
    fn keeps_suffix() {
        let version = v("1.7.0rc1");
        assert_eq!(version.components(), &[1, 7, 0]);
        assert_eq!(version.suffix(), Some("rc1"));
        assert_eq!(version.to_string(), "1.7.0rc1");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("unknown").is_err());
        assert!(Version::parse("1.2 beta").is_err());
        assert!(Version::parse("v").is_err());
    }

    #[test]
    fn rejects_overflowing_component() {
        assert!(Version::parse("99999999999999999999999.1").is_err());
    }

    #[test]
    fn compares_component_wise() {
        assert!(v("2.7.5") > v("2.7"));
        assert!(v("1.10") > v("1.9"));
        assert!(v("0.25") > v("0.19"));
        assert!(v("3.0") > v("2.99.99"));
        assert!(v("1.6.2") < v("1.7"));
    }

    #[test]
    fn longer_sequence_breaks_ties() {
        assert!(v("2.7") < v("2.7.0"));
        assert!(v("2.7.0") < v("2.7.1"));
        assert!(v("2.7.0").satisfies(&v("2.7")));
    }

    #[test]
    fn pre_release_sorts_before_release() {
        assert!(v("1.7.0rc1") < v("1.7.0"));
        assert!(v("1.7.0.dev0") < v("1.7.0"));
        assert!(v("1.7.0rc1") > v("1.6.9"));
        assert!(!v("1.7rc1").satisfies(&v("1.7")));
    }

    #[test]
    fn post_release_sorts_after_release() {
        assert!(v("1.7.0.post1") > v("1.7.0"));
        assert!(v("1.7.0+local") > v("1.7.0"));
        assert!(v("1.7.0-post2") > v("1.7.0rc1"));
    }

    #[test]
    fn same_rank_suffixes_compare_lexically() {
        assert!(v("2.0a1") < v("2.0b1"));
        assert!(v("2.0rc1") < v("2.0rc2"));
    }

    #[test]
    fn ordering_is_reflexive() {
        for s in ["0", "2.7", "2.7.0", "1.7.0rc1", "1.0+build"] {
            let a = v(s);
            assert!(a <= a);
            assert_eq!(a.cmp(&a), Ordering::Equal);
        }
    }

    #[test]
    fn ordering_is_transitive() {
        let mut versions: Vec<Version> = [
            "2.7.5", "0.9.2", "2.7", "1.7.0rc1", "1.7", "2.7.0", "1.7.0.post1", "0.19", "1.7.0",
        ]
        .iter()
        .map(|s| v(s))
        .collect();
        versions.sort();

        for i in 0..versions.len() {
            for j in i..versions.len() {
                for k in j..versions.len() {
                    assert!(versions[i] <= versions[j]);
                    assert!(versions[j] <= versions[k]);
                    assert!(versions[i] <= versions[k]);
                }
            }
        }
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&v("v2.7.5")).unwrap();
        assert_eq!(json, "\"2.7.5\"");
    }
}
