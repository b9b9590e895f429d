//! Environment-variable detection.
//!
//! Packaging layers often export the versions of what they provisioned
//! (`FFTW_VERSION=3.3.8`). This strategy reads such a variable from the
//! probe context.

use super::context::ProbeContext;
use super::detector::{Detection, Detector};

/// Reads a component's version from an environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvDetector {
    var: String,
}

impl EnvDetector {
    /// Read the version from `var`.
    pub fn new(var: &str) -> Self {
        Self {
            var: var.to_string(),
        }
    }
}

impl Detector for EnvDetector {
    fn kind(&self) -> &'static str {
        "env"
    }

    fn describe(&self) -> String {
        format!("environment variable '{}'", self.var)
    }

    fn detect(&self, ctx: &ProbeContext) -> Detection {
        match ctx.var(&self.var).map(str::trim) {
            Some(value) if !value.is_empty() => Detection::found(value),
            Some(_) => Detection::absent(format!("environment variable '{}' is empty", self.var)),
            None => Detection::absent(format!("environment variable '{}' is not set", self.var)),
        }
    }
}
