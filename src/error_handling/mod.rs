//! Error handling.
//!
//! This module provides:
//! - The `ErrorCode` taxonomy reported as the exit status
//! - Typed errors for the spec loader, HTTP client, and initialization
//! - Classification of `reqwest` errors into build and transport failures
//! - Error code tallies for the run summary

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ErrorTally;
pub use types::{ClientError, ErrorCode, InitializationError, SpecLoadError};
