//! Check list schema definitions.
//!
//! These structs map to the YAML check list format:
//!
//! ```yaml
//! settings:
//!   python: python3
//!   timeout_secs: 10
//! checks:
//!   - name: numpy
//!     required_version: "1.7"
//!   - name: h5py
//!     required_version: "2.0"
//!     category: optional
//!     purpose: for loading MATLAB v7.3 files
//! ```

use crate::check::Category;
use crate::probe::ProbeSpec;
use serde::{Deserialize, Deserializer, Serialize};

/// Root of a check list file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Settings shared by all probes
    pub settings: Settings,

    /// Declared checks, in report order
    pub checks: Vec<CheckEntry>,
}

/// Settings shared by all probes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Interpreter used by python probes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Upper bound in seconds for each external command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// One declared check as written in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckEntry {
    /// Component name
    pub name: String,

    /// Minimum version. Unquoted YAML numbers (`2.7`) are accepted.
    #[serde(deserialize_with = "version_string")]
    pub required_version: String,

    /// required (default) or optional
    #[serde(default)]
    pub category: Category,

    /// What an optional component enables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Detection strategy override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe: Option<ProbeSpec>,
}

fn version_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a version string, found {:?}",
            other
        ))),
    }
}
