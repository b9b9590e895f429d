//! Declared check lists.
//!
//! - Schema definitions in [`schema`]
//! - Loading, the built-in list and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use segcheck::config::{parse_config, validate};
//! use std::path::Path;
//!
//! let yaml = "checks:\n  - name: numpy\n    required_version: \"1.7\"\n";
//! let config = parse_config(yaml, Path::new("checks.yml")).unwrap();
//! let specs = validate(&config).unwrap();
//! assert_eq!(specs[0].name, "numpy");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{builtin_config, load_config, load_or_builtin, parse_config, validate};
pub use schema::{CheckConfig, CheckEntry, Settings};
