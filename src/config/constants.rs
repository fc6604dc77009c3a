//! Configuration constants.
//!
//! Defaults shared by the CLI and the library `Config`.

/// Spec file used when no files are given on the command line.
pub const DEFAULT_SPEC_FILE: &str = "urls.json";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("validate-http-headers/", env!("CARGO_PKG_VERSION"));

// Cache-busting request headers forced by `--no-cache`
/// Cache-Control header name
pub const HEADER_CACHE_CONTROL: &str = "Cache-Control";
/// Pragma header name (HTTP/1.0 caches)
pub const HEADER_PRAGMA: &str = "Pragma";
/// Value sent for both cache-busting headers
pub const NO_CACHE: &str = "no-cache";
