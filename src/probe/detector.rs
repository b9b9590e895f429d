//! Detection strategy trait and shared helpers.

use super::context::ProbeContext;
use regex::Regex;
use std::sync::LazyLock;

/// What a detector found for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// The component is present and reported this version text.
    ///
    /// The text is not guaranteed to parse; that is decided by the checker.
    Found { raw: String },

    /// The component could not be found or its detection mechanism failed.
    Absent { reason: String },
}

impl Detection {
    /// Create a found detection.
    pub fn found(raw: &str) -> Self {
        Detection::Found {
            raw: raw.trim().to_string(),
        }
    }

    /// Create an absent detection.
    pub fn absent(reason: impl Into<String>) -> Self {
        Detection::Absent {
            reason: reason.into(),
        }
    }

    /// Whether anything was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Detection::Found { .. })
    }
}

/// A way of detecting one kind of component.
///
/// Implementations must only inspect the environment through the
/// [`ProbeContext`] and must never fail: every problem is reported as
/// [`Detection::Absent`].
pub trait Detector: Send + Sync {
    /// Short name of the strategy, for logs (`python-module`, `command`).
    fn kind(&self) -> &'static str;

    /// Human-readable description of what is probed.
    fn describe(&self) -> String;

    /// Probe the environment.
    fn detect(&self, ctx: &ProbeContext) -> Detection;
}

static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[vV]?(\d+(?:\.\d+)+(?:[A-Za-z+_-][0-9A-Za-z.+_-]*)?)").unwrap()
});

/// Extract the first dotted version number from free-form tool output.
///
/// Handles `Python 2.7.5`, `cmake version 3.1.0`, `v18.17.0` and the like.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_TOKEN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches(['.', '-', '_']).to_string())
}
