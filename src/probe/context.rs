//! The environment a probe inspects.
//!
//! Detectors read everything they need from a [`ProbeContext`] instead of
//! ambient process state, so a check pass can be pointed at a synthetic
//! environment.

use super::runner::{CommandOutput, CommandRunner, SystemRunner};
use crate::error::Result;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Interpreter used by python probes when none is configured.
pub const DEFAULT_PYTHON: &str = "python3";

/// Per-probe time bound when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Explicit environment passed into every probe.
#[derive(Clone)]
pub struct ProbeContext {
    python: String,
    vars: HashMap<String, String>,
    timeout: Duration,
    runner: Arc<dyn CommandRunner>,
}

impl ProbeContext {
    /// Snapshot the current process environment.
    pub fn from_system() -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
            timeout: DEFAULT_TIMEOUT,
            runner: Arc::new(SystemRunner),
        }
    }

    /// An environment with no variables whose commands are answered by `runner`.
    pub fn synthetic(runner: impl CommandRunner + 'static) -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            vars: HashMap::new(),
            timeout: DEFAULT_TIMEOUT,
            runner: Arc::new(runner),
        }
    }

    /// Use `python` as the interpreter for python probes.
    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    /// Bound every external command by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set an environment variable visible to probes.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// The interpreter python probes run.
    pub fn python(&self) -> &str {
        &self.python
    }

    /// The per-command time bound.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Look up an environment variable.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Run an external command through this context's runner.
    pub fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        self.runner.run(program, args, self.timeout)
    }
}

impl fmt::Debug for ProbeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeContext")
            .field("python", &self.python)
            .field("vars", &self.vars.len())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
