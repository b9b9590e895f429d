//! Check command implementation.
//!
//! `segcheck --check` loads the check list, probes every component and
//! prints the compliance report. The exit code reflects required checks
//! only.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::check::Checker;
use crate::cli::args::{Cli, OutputFormat};
use crate::config::{load_or_builtin, validate, CheckConfig};
use crate::error::Result;
use crate::probe::{ProbeContext, ProbeRegistry};
use crate::report::{to_json, Report, TextRenderer};
use crate::ui::{colors_wanted, Theme};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
#[derive(Debug, Clone, Default)]
pub struct CheckCommand {
    config: Option<PathBuf>,
    python: Option<String>,
    timeout: Option<u64>,
    format: OutputFormat,
    verbose: bool,
    colors: bool,
}

impl CheckCommand {
    /// Create a check command from parsed CLI flags.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            python: cli.python.clone(),
            timeout: cli.timeout,
            format: cli.format,
            verbose: cli.verbose,
            colors: cli.format == OutputFormat::Text && colors_wanted(cli.no_color),
        }
    }

    /// Run the check pass for an already-loaded check list against `base`.
    ///
    /// CLI flags take precedence over the list's settings, which take
    /// precedence over `base`.
    pub fn execute_with(
        &self,
        config: &CheckConfig,
        base: ProbeContext,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        let specs = validate(config)?;

        let mut ctx = base;
        if let Some(python) = self.python.as_ref().or(config.settings.python.as_ref()) {
            ctx = ctx.with_python(python.clone());
        }
        if let Some(secs) = self.timeout.or(config.settings.timeout_secs) {
            ctx = ctx.with_timeout(Duration::from_secs(secs));
        }
        debug!("Checking {} components with {:?}", specs.len(), ctx);

        let registry = ProbeRegistry::new();
        let results = Checker::new(&registry, &ctx).run(&specs);
        let report = Report::new(results);

        match self.format {
            OutputFormat::Text => {
                let renderer = TextRenderer::new(Theme::for_output(self.colors))
                    .verbose(self.verbose);
                write!(out, "{}", renderer.render(&report))?;
            }
            OutputFormat::Json => {
                writeln!(out, "{}", to_json(&report)?)?;
            }
        }

        info!(
            "{} of {} required checks failed",
            report.failed_required(),
            report.required().count()
        );

        if report.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config = load_or_builtin(self.config.as_deref())?;
        self.execute_with(&config, ProbeContext::from_system(), out)
    }
}
