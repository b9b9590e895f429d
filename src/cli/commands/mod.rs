//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. The
//! [`CommandDispatcher`] picks the command from the parsed flags.

pub mod check;
pub mod dispatcher;
pub mod list_probes;

pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult, USAGE_EXIT_CODE};
pub use list_probes::ListProbesCommand;
