//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// segcheck - Verify the Python Segmentation Tools environment.
#[derive(Debug, Parser)]
#[command(name = "segcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Check installed dependencies and print a compliance report
    #[arg(long)]
    pub check: bool,

    /// List components with a built-in detection strategy
    #[arg(long, conflicts_with = "check")]
    pub list_probes: bool,

    /// Path to a check list (defaults to the built-in list)
    #[arg(short, long, env = "SEGCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Python interpreter used by python probes
    #[arg(long, env = "SEGCHECK_PYTHON")]
    pub python: Option<String>,

    /// Seconds each probe may take before it counts as absent
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Explain why failing checks failed
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table for humans
    #[default]
    Text,
    /// JSON document for tooling
    Json,
}
