//! Logger initialization.
//!
//! Plain output is the validation report itself: one line per header check,
//! ❌ for failures and ✔️ for passing checks. JSON output carries the same
//! lines for log collectors.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Installs the process logger.
///
/// `RUST_LOG` is read first and `level` (from `--log-level`) then applies to
/// this crate, so `RUST_LOG=reqwest=debug validate-http-headers` still shows
/// the report while tracing the client. HTTP stack crates are capped at
/// `info`.
///
/// Fails with `InitializationError::LoggerError` if a logger is already set.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json_line(
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{}", line)
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let prefix = marker(level);
                let tag = coloured_level(level);

                // Report lines are untagged; dependency lines name their crate
                if record.target().starts_with(env!("CARGO_CRATE_NAME")) {
                    writeln!(buf, "{} [{}] {}", prefix, tag, record.args())
                } else {
                    writeln!(
                        buf,
                        "{} {} [{}] {}",
                        prefix,
                        record.target().cyan(),
                        tag,
                        record.args()
                    )
                }
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Line prefix in plain output.
fn marker(level: Level) -> &'static str {
    match level {
        Level::Error => "❌",
        Level::Warn => "⚠️",
        Level::Info => "✔️",
        Level::Debug => "🔍",
        Level::Trace => "🔬",
    }
}

fn coloured_level(level: Level) -> ColoredString {
    let name = level.to_string();
    match level {
        Level::Error => name.red(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.purple(),
    }
}

/// One JSON log line with `ts` (unix ms), `level`, `target` and `msg`.
fn json_line(ts: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}
