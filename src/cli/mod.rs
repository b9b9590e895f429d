//! Command-line interface for segcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, OutputFormat};
pub use commands::{Command, CommandDispatcher, CommandResult};
