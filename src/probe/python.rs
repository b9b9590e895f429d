//! Python interpreter and package detection.
//!
//! Both strategies run the context's interpreter with a one-line script.
//! The scripts stay compatible with Python 2.7, the oldest interpreter the
//! toolkit supports.

use super::context::ProbeContext;
use super::detector::{Detection, Detector};
use super::runner::display_command;
use tracing::debug;

/// Script printing the interpreter's `major.minor.micro` version.
const INTERPRETER_SCRIPT: &str =
    "import sys; print('.'.join(str(x) for x in sys.version_info[:3]))";

/// Attributes searched, in order, for a module's version.
///
/// `PILLOW_VERSION` precedes `VERSION` because old Pillow releases keep the
/// classic PIL value (`1.1.7`) in `VERSION`.
const VERSION_ATTRIBUTES: &[&str] = &["__version__", "PILLOW_VERSION", "VERSION", "version"];

/// Detects the Python interpreter itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonInterpreter;

impl Detector for PythonInterpreter {
    fn kind(&self) -> &'static str {
        "python"
    }

    fn describe(&self) -> String {
        "python interpreter".to_string()
    }

    fn detect(&self, ctx: &ProbeContext) -> Detection {
        run_python(ctx, INTERPRETER_SCRIPT, || {
            format!("interpreter '{}' is not available", ctx.python())
        })
    }
}

/// Detects an importable Python package by its version attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonModule {
    module: String,
}

impl PythonModule {
    /// Probe the module importable as `module` (e.g. `PIL`, `Cython`).
    pub fn new(module: &str) -> Self {
        Self {
            module: module.to_string(),
        }
    }

    /// The import name.
    pub fn module(&self) -> &str {
        &self.module
    }

    fn script(&self) -> String {
        let lookups = VERSION_ATTRIBUTES
            .iter()
            .map(|attr| format!("getattr(_m, '{}', None)", attr))
            .collect::<Vec<_>>()
            .join(" or ");
        format!(
            "import {} as _m; v = {} or 'unknown'; \
             print('.'.join(str(x) for x in v) if isinstance(v, tuple) else v)",
            self.module, lookups
        )
    }
}

impl Detector for PythonModule {
    fn kind(&self) -> &'static str {
        "python-module"
    }

    fn describe(&self) -> String {
        format!("python module '{}'", self.module)
    }

    fn detect(&self, ctx: &ProbeContext) -> Detection {
        if !is_valid_module_name(&self.module) {
            return Detection::absent(format!("'{}' is not a python module name", self.module));
        }
        run_python(ctx, &self.script(), || {
            format!("module '{}' could not be imported", self.module)
        })
    }
}

/// Whether `name` can be spliced into an `import` statement.
pub fn is_valid_module_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

fn run_python(ctx: &ProbeContext, script: &str, failed: impl FnOnce() -> String) -> Detection {
    let args = ["-c", script];
    match ctx.run(ctx.python(), &args) {
        Ok(output) if output.succeeded() => Detection::found(&output.stdout),
        Ok(output) => {
            debug!(
                "{} exited with {:?}",
                display_command(ctx.python(), &args),
                output.exit_code
            );
            match output.stderr_summary() {
                Some(detail) => Detection::absent(format!("{} ({})", failed(), detail)),
                None => Detection::absent(failed()),
            }
        }
        Err(e) => Detection::absent(format!("{}: {}", failed(), e)),
    }
}
