//! cvnum version information.
//!
//! Exposed as a single constant so the CLI and any embedding tool report the same value.

/// The cvnum version string (for example, `0.1.0`).
pub const CVNUM_VERSION: &str = env!("CARGO_PKG_VERSION");
