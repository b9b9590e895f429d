//! JSON rendering of compliance reports.

use super::Report;
use crate::check::{Category, Installed, ProbeResult};
use crate::error::Result;
use crate::version::Version;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'r> {
    passed: bool,
    checked_at: DateTime<Utc>,
    required: Vec<JsonRow<'r>>,
    optional: Vec<JsonRow<'r>>,
}

#[derive(Debug, Serialize)]
struct JsonRow<'r> {
    name: &'r str,
    category: Category,
    required: &'r Version,
    #[serde(skip_serializing_if = "Option::is_none")]
    installed: Option<String>,
    status: &'static str,
    satisfied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    purpose: Option<&'r str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl<'r> JsonRow<'r> {
    fn from_result(result: &'r ProbeResult<'_>) -> Self {
        let spec = result.spec();
        let installed = match result.installed() {
            Installed::Present(version) => Some(version.to_string()),
            Installed::Unparseable { raw } => Some(raw.clone()),
            Installed::Absent { .. } => None,
        };
        Self {
            name: &spec.name,
            category: spec.category,
            required: &spec.required_version,
            installed,
            status: result.installed().label(),
            satisfied: result.satisfied(),
            purpose: spec.purpose.as_deref(),
            detail: result.failure_detail(),
        }
    }
}

/// Serialize a report as pretty-printed JSON.
pub fn to_json(report: &Report<'_>) -> Result<String> {
    let doc = JsonReport {
        passed: report.passed(),
        checked_at: report.checked_at(),
        required: report.required().map(JsonRow::from_result).collect(),
        optional: report.optional().map(JsonRow::from_result).collect(),
    };
    let json = serde_json::to_string_pretty(&doc).map_err(anyhow::Error::from)?;
    Ok(json)
}
