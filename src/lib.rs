//! segcheck - Environment compliance checking for the Python Segmentation
//! Tools stack.
//!
//! segcheck probes the interpreter and the libraries the toolkit depends
//! on, compares each installed version against a minimum and prints a
//! report split into required and optional components.
//!
//! # Modules
//!
//! - [`check`] - Check definitions, results and the checker
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Check list loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Detection strategies and command execution
//! - [`report`] - Report aggregation, text and JSON rendering
//! - [`ui`] - Terminal theme and status icons
//! - [`version`] - Version parsing and ordering
//!
//! # Example
//!
//! ```
//! use segcheck::check::{CheckSpec, Checker};
//! use segcheck::probe::{CommandOutput, ProbeContext, ProbeRegistry, ScriptedRunner};
//! use segcheck::report::{Report, TextRenderer};
//! use segcheck::version::Version;
//!
//! let runner = ScriptedRunner::new()
//!     .with("python3 -c import sys", CommandOutput::success("2.7.5\n"));
//! let ctx = ProbeContext::synthetic(runner);
//! let registry = ProbeRegistry::new();
//!
//! let specs = vec![CheckSpec::required("Python", Version::parse("2.7").unwrap())];
//! let report = Report::new(Checker::new(&registry, &ctx).run(&specs));
//!
//! assert_eq!(report.exit_code(), 0);
//! assert!(TextRenderer::default().render(&report).contains("v2.7.5"));
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod ui;
pub mod version;

pub use error::{CheckerError, Result};
