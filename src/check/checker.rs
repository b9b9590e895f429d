//! The check pass.
//!
//! The `Checker` probes every declared check against a [`ProbeContext`] and
//! compares the result with the requirement. Probes are independent and
//! run in parallel; results come back in declaration order.

use super::result::{Installed, ProbeResult};
use super::spec::CheckSpec;
use crate::probe::{ProbeContext, ProbeRegistry};
use rayon::prelude::*;
use tracing::{debug, warn};

/// Runs declared checks against an environment.
pub struct Checker<'a> {
    registry: &'a ProbeRegistry,
    ctx: &'a ProbeContext,
}

impl<'a> Checker<'a> {
    /// Create a new checker.
    pub fn new(registry: &'a ProbeRegistry, ctx: &'a ProbeContext) -> Self {
        Self { registry, ctx }
    }

    /// Probe and compare a single check.
    pub fn check_one<'s>(&self, spec: &'s CheckSpec) -> ProbeResult<'s> {
        let detector = self.registry.detector_for(spec);
        debug!("Probing {} via {}", spec.name, detector.describe());

        let installed = Installed::from_detection(detector.detect(self.ctx));
        match &installed {
            Installed::Present(version) => {
                debug!("{}: found {}", spec.name, version)
            }
            Installed::Unparseable { raw } => {
                warn!("{}: unrecognized version '{}'", spec.name, raw)
            }
            Installed::Absent { reason } => {
                debug!("{}: {} reported absent: {}", spec.name, detector.kind(), reason)
            }
        }

        ProbeResult::new(spec, installed)
    }

    /// Probe every check, in parallel, preserving declaration order.
    pub fn run<'s>(&self, specs: &'s [CheckSpec]) -> Vec<ProbeResult<'s>> {
        specs.par_iter().map(|spec| self.check_one(spec)).collect()
    }
}
