//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default spec file, user agent, no-cache headers)
//! - CLI option types and parsing
//! - The library `Config` and the `ValidationOptions` derived from it

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{parse_header, Config, LogFormat, LogLevel, Opt, ValidationOptions};
