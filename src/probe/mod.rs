//! Version probing.
//!
//! This module detects whether a component is installed and which version
//! it reports. Detection never fails: problems resolve to
//! [`Detection::Absent`] with a reason.
//!
//! # Modules
//!
//! - [`context`] - Explicit environment passed into every probe
//! - [`detector`] - The `Detector` strategy trait and version extraction
//! - [`python`] - Python interpreter and package detection
//! - [`command`] - Executable `--version` style detection
//! - [`env`] - Environment-variable detection
//! - [`registry`] - Component-to-strategy registry
//! - [`runner`] - External command execution with a time bound

pub mod command;
pub mod context;
pub mod detector;
pub mod env;
pub mod python;
pub mod registry;
pub mod runner;

pub use command::CommandDetector;
pub use context::{ProbeContext, DEFAULT_PYTHON, DEFAULT_TIMEOUT};
pub use detector::{extract_version, Detection, Detector};
pub use env::EnvDetector;
pub use python::{PythonInterpreter, PythonModule};
pub use registry::{ProbeRegistry, ProbeSpec};
pub use runner::{CommandOutput, CommandRunner, ScriptedRunner, SystemRunner};
