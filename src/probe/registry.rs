//! Probe registry and strategy declarations.
//!
//! [`ProbeSpec`] declares which detection strategy to use for a component.
//! The [`ProbeRegistry`] knows the strategy for the toolkit's own
//! dependencies; check lists may override it per component.

use super::command::CommandDetector;
use super::detector::Detector;
use super::env::EnvDetector;
use super::python::{is_valid_module_name, PythonInterpreter, PythonModule};
use crate::check::CheckSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declared detection strategy for a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProbeSpec {
    /// The Python interpreter.
    Python,

    /// An importable Python package.
    PythonModule { module: String },

    /// An executable that prints its version.
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },

    /// A version exported in an environment variable.
    Env { var: String },
}

impl ProbeSpec {
    /// Build the detector this declaration describes.
    pub fn build(&self) -> Box<dyn Detector> {
        match self {
            ProbeSpec::Python => Box::new(PythonInterpreter),
            ProbeSpec::PythonModule { module } => Box::new(PythonModule::new(module)),
            ProbeSpec::Command { program, args } => {
                Box::new(CommandDetector::new(program, args.clone()))
            }
            ProbeSpec::Env { var } => Box::new(EnvDetector::new(var)),
        }
    }

    /// Check the declaration's fields, returning a message for the first problem.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            ProbeSpec::Python => Ok(()),
            ProbeSpec::PythonModule { module } if !is_valid_module_name(module) => {
                Err(format!("'{}' is not a valid python module name", module))
            }
            ProbeSpec::PythonModule { .. } => Ok(()),
            ProbeSpec::Command { program, .. } if program.trim().is_empty() => {
                Err("command probe needs a program".to_string())
            }
            ProbeSpec::Command { .. } => Ok(()),
            ProbeSpec::Env { var } if var.trim().is_empty() || var.contains('=') => {
                Err(format!("'{}' is not a valid environment variable name", var))
            }
            ProbeSpec::Env { .. } => Ok(()),
        }
    }
}

/// Registry of components with a known detection strategy.
#[derive(Debug, Clone)]
pub struct ProbeRegistry {
    entries: BTreeMap<String, ProbeSpec>,
}

impl Default for ProbeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeRegistry {
    /// Create a registry with the toolkit's built-in components.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register("python", ProbeSpec::Python);

        // Import name matches the component name.
        for module in ["numpy", "scipy", "h5py", "psutil", "subprocess32"] {
            registry.register(module, python_module(module));
        }

        // Distribution name differs from the import name.
        registry.register("cython", python_module("Cython"));
        registry.register("pyfftw", python_module("pyfftw"));
        registry.register("fftw", python_module("pyfftw"));
        registry.register("pillow", python_module("PIL"));
        registry.register("pil", python_module("PIL"));

        registry
    }

    /// Create a registry with no entries.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register (or replace) the strategy for a component name.
    pub fn register(&mut self, name: &str, spec: ProbeSpec) {
        self.entries.insert(name.to_lowercase(), spec);
    }

    /// Look up the strategy for a component, ignoring case.
    pub fn get(&self, name: &str) -> Option<&ProbeSpec> {
        self.entries.get(&name.to_lowercase())
    }

    /// Component names with a registered strategy, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Pick the strategy for a declared check.
    ///
    /// An explicit `probe` on the check wins, then the registry entry.
    /// Unregistered components are assumed to be python packages importable
    /// under their own name.
    pub fn resolve(&self, check: &CheckSpec) -> ProbeSpec {
        if let Some(spec) = &check.probe {
            return spec.clone();
        }
        self.get(&check.name)
            .cloned()
            .unwrap_or_else(|| python_module(&check.name))
    }

    /// Build the detector for a declared check.
    pub fn detector_for(&self, check: &CheckSpec) -> Box<dyn Detector> {
        self.resolve(check).build()
    }
}

fn python_module(module: &str) -> ProbeSpec {
    ProbeSpec::PythonModule {
        module: module.to_string(),
    }
}
