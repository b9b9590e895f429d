//! Declared checks and the check pass.
//!
//! # Modules
//!
//! - [`spec`] - `CheckSpec` and `Category` declarations
//! - [`result`] - `ProbeResult` and the `Installed` outcome
//! - [`checker`] - The `Checker` that probes and compares

pub mod checker;
pub mod result;
pub mod spec;

pub use checker::Checker;
pub use result::{Installed, ProbeResult};
pub use spec::{Category, CheckSpec};
