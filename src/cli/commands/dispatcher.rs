//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI flags to commands

use std::io::Write;

use clap::CommandFactory;

use crate::cli::args::Cli;
use crate::error::Result;

/// Exit code for a usage or configuration error.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution: the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// 0 for success, non-zero for failure.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

/// Dispatches parsed CLI flags to their command.
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Dispatch and execute the command the flags ask for.
    ///
    /// With no action flag, prints usage and fails with [`USAGE_EXIT_CODE`].
    pub fn dispatch(cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        if cli.check {
            let cmd = super::check::CheckCommand::from_cli(cli);
            return cmd.execute(out);
        }
        if cli.list_probes {
            return super::list_probes::ListProbesCommand.execute(out);
        }

        let help = Cli::command().render_help();
        writeln!(out, "{}", help)?;
        writeln!(out, "Nothing to do: pass --check to verify the environment.")?;
        Ok(CommandResult::failure(USAGE_EXIT_CODE))
    }
}
