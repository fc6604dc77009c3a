//! Run coordination across spec files.

use std::path::{Path, PathBuf};

use log::{error, info};

use crate::config::{Config, DEFAULT_SPEC_FILE};
use crate::error_handling::{ErrorCode, ErrorTally, InitializationError};
use crate::http::HeaderClient;
use crate::validate::SpecValidator;

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No spec file was given and the default one does not exist; the caller
    /// should print usage help.
    Usage,
    /// Every spec file was validated.
    Completed(RunReport),
}

impl RunOutcome {
    /// Process exit status: 0 for usage help, otherwise the report's.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Usage => 0,
            RunOutcome::Completed(report) => report.exit_code(),
        }
    }
}

/// Results of validating a sequence of spec files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Files validated, in order
    pub files: Vec<PathBuf>,
    /// Error codes of all files, in file, spec, header, value order
    pub errors: Vec<ErrorCode>,
}

impl RunReport {
    /// The first error produced, which decides the exit status.
    pub fn first_error(&self) -> Option<ErrorCode> {
        self.errors.first().copied()
    }

    /// 0 when everything passed, otherwise the first error's code.
    pub fn exit_code(&self) -> i32 {
        self.first_error().map_or(0, ErrorCode::exit_code)
    }
}

/// Picks the spec files to validate.
///
/// Given files are used as-is. With none, `default` is used if it exists;
/// otherwise `None` asks for usage help.
pub fn resolve_spec_files(files: &[PathBuf], default: &Path) -> Option<Vec<PathBuf>> {
    if !files.is_empty() {
        return Some(files.to_vec());
    }
    if default.exists() {
        Some(vec![default.to_path_buf()])
    } else {
        None
    }
}

/// Validates the configured spec files with a `reqwest` client.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be initialized; validation
/// failures are reported in the `RunReport`.
pub async fn run(config: &Config) -> Result<RunOutcome, InitializationError> {
    let Some(files) = resolve_spec_files(&config.files, Path::new(DEFAULT_SPEC_FILE)) else {
        return Ok(RunOutcome::Usage);
    };
    let validator = SpecValidator::new(&config.validation_options())?;
    Ok(RunOutcome::Completed(validate_files(&validator, &files).await))
}

/// Validates each file in order. A failing file never stops the next one.
pub async fn validate_files<C: HeaderClient>(
    validator: &SpecValidator<C>,
    files: &[PathBuf],
) -> RunReport {
    let mut errors = Vec::new();
    for file in files {
        errors.extend(validator.validate_file(file).await);
    }

    let report = RunReport {
        files: files.to_vec(),
        errors,
    };
    print_summary(&report);
    report
}

fn print_summary(report: &RunReport) {
    let tally = ErrorTally::from_codes(&report.errors);
    if tally.total() == 0 {
        info!(
            "All headers as expected across {} spec file(s)",
            report.files.len()
        );
        return;
    }

    error!(
        "{} failure(s) across {} spec file(s)",
        tally.total(),
        report.files.len()
    );
    for (code, count) in tally.non_zero() {
        error!("   {}: {}", code, count);
    }
    if let Some(first) = report.first_error() {
        error!("Exiting with {} ({})", first.exit_code(), first);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_given_files_untouched() {
        let files = vec![PathBuf::from("b.json"), PathBuf::from("a.json")];
        assert_eq!(
            resolve_spec_files(&files, Path::new("does-not-matter.json")),
            Some(files)
        );
    }

    #[test]
    fn test_resolve_default_file_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join(DEFAULT_SPEC_FILE);
        fs::write(&default, "{}").unwrap();

        assert_eq!(resolve_spec_files(&[], &default), Some(vec![default]));
    }

    #[test]
    fn test_resolve_asks_for_usage_without_default_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resolve_spec_files(&[], &dir.path().join(DEFAULT_SPEC_FILE)),
            None
        );
    }

    #[test]
    fn test_exit_code_is_first_error() {
        let report = RunReport {
            files: vec![PathBuf::from("a.json"), PathBuf::from("b.json")],
            errors: vec![
                ErrorCode::FailAssertResponseHeaderValue,
                ErrorCode::FileError,
            ],
        };
        assert_eq!(report.exit_code(), 6);
        assert_eq!(RunOutcome::Completed(report).exit_code(), 6);
    }

    #[test]
    fn test_exit_code_zero_without_errors() {
        let report = RunReport {
            files: vec![PathBuf::from("a.json")],
            errors: vec![],
        };
        assert_eq!(report.first_error(), None);
        assert_eq!(report.exit_code(), 0);
        assert_eq!(RunOutcome::Usage.exit_code(), 0);
    }
}
