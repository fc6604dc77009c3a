//! validate_http_headers library: check many URLs' HTTP headers against JSON specs
//!
//! A spec file lists URLs together with the request headers to send and the
//! response headers expected back. A `default` section applies to every URL
//! and each URL can override it header by header.
//!
//! # Example
//!
//! ```no_run
//! use validate_http_headers::{run, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     files: vec![PathBuf::from("urls.json")],
//!     ..Default::default()
//! };
//!
//! let outcome = run(&config).await?;
//! std::process::exit(outcome.exit_code());
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Requests are made one at a time.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod headers;
pub mod http;
pub mod initialization;
mod run;
pub mod spec;
mod validate;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, ValidationOptions};
pub use error_handling::{ClientError, ErrorCode, ErrorTally, InitializationError, SpecLoadError};
pub use run::{resolve_spec_files, run, validate_files, RunOutcome, RunReport};
pub use validate::{SpecValidator, UrlStep};
