//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_USER_AGENT, HEADER_CACHE_CONTROL, HEADER_PRAGMA, NO_CACHE};
use crate::spec::Headers;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Validate ./urls.json
/// validate-http-headers
///
/// # Several spec files, bypassing caches on the way
/// validate-http-headers staging.json production.json --no-cache
///
/// # Force an extra request header on every URL
/// validate-http-headers urls.json --header "Authorization: Bearer abc"
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "validate-http-headers",
    version,
    about = "Validates the HTTP headers of many URLs against JSON spec files.",
    after_help = concat!(
        "Each SPECFILE looks like:\n\n",
        "  {\n",
        "    \"default\": { \"requestHeaders\": {...}, \"responseHeaders\": {...} },\n",
        "    \"specs\": [ { \"url\": \"https://...\", \"requestHeaders\": {...}, ",
        "\"responseHeaders\": {...} } ]\n",
        "  }\n\n",
        "A response header expected as [\"\"] must be absent.\n\n",
        "Exit status is 0 when every header matched, otherwise the code of the first failure:\n",
        "  1 spec file unreadable      2 spec file not valid JSON\n",
        "  3 request cannot be built (also when the HTTP client cannot be set up)\n",
        "  4 request failed            5 header missing or unexpectedly present\n",
        "  6 header value mismatch"
    )
)]
pub struct Opt {
    /// Spec files to validate, in order (default: urls.json)
    #[arg(value_parser)]
    pub files: Vec<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Request header sent to every URL, as "Name: value" (repeatable)
    ///
    /// Repeating a name sends every value in order. Default and per-URL
    /// request headers from the spec file take precedence.
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Send `Cache-Control: no-cache` and `Pragma: no-cache` with every request
    #[arg(long)]
    pub no_cache: bool,

    /// Open a fresh connection for every request
    #[arg(long)]
    pub disable_connection_reuse: bool,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds (no timeout unless set)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,
}

/// Parses a `Name: value` pair given to `--header`.
///
/// The value may be empty (`"X-Empty:"`); the name may not.
pub fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected \"Name: value\", got {:?}", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing header name in {:?}", raw));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use validate_http_headers::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     files: vec![PathBuf::from("urls.json")],
///     no_cache: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Spec files to validate, in order. Empty means the default spec file.
    pub files: Vec<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Forced request headers, in the order given
    pub headers: Vec<(String, String)>,

    /// Force cache-busting request headers
    pub no_cache: bool,

    /// Disable keep-alive connection reuse
    pub disable_connection_reuse: bool,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            headers: Vec::new(),
            no_cache: false,
            disable_connection_reuse: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: None,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            files: opt.files,
            log_level: opt.log_level,
            log_format: opt.log_format,
            headers: opt.headers,
            no_cache: opt.no_cache,
            disable_connection_reuse: opt.disable_connection_reuse,
            user_agent: opt.user_agent,
            timeout_seconds: opt.timeout_seconds,
        }
    }
}

impl Config {
    /// Builds the options handed to the spec validator.
    ///
    /// `--header` values replace the `--no-cache` defaults for the same name.
    pub fn validation_options(&self) -> ValidationOptions {
        let mut forced = Headers::new();
        if self.no_cache {
            for name in [HEADER_CACHE_CONTROL, HEADER_PRAGMA] {
                forced.insert(name.to_string(), Some(vec![NO_CACHE.to_string()]));
            }
        }

        let mut given: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for (name, value) in &self.headers {
            given.entry(name.as_str()).or_default().push(value.clone());
        }
        for (name, values) in given {
            forced.insert(name.to_string(), Some(values));
        }

        ValidationOptions {
            forced_request_headers: forced,
            disable_connection_reuse: self.disable_connection_reuse,
            user_agent: self.user_agent.clone(),
            timeout: self.timeout_seconds.map(Duration::from_secs),
        }
    }
}

/// Settings the spec validator is constructed with.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Headers sent with every request, at the lowest priority
    pub forced_request_headers: Headers,
    /// Keep no idle connections between requests
    pub disable_connection_reuse: bool,
    /// HTTP User-Agent header value
    pub user_agent: String,
    /// Transport-level timeout, if any
    pub timeout: Option<Duration>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Config::default().validation_options()
    }
}
