//! Header expectation evaluation.

use std::fmt;

use crate::error_handling::ErrorCode;

/// Classification of a single header check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Expectation met
    Success,
    /// The header is missing, present when it must be absent, or carries a
    /// different number of values than expected
    MissingOrUnexpectedExistence,
    /// The value at one position differs
    ValueMismatch,
}

/// Result of checking one header, or one position of a multi-valued header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderCheck {
    /// Header must be absent and is.
    Absent {
        /// Header name as written in the spec file
        header: String,
    },
    /// Value at `index` matched.
    Matched {
        /// Header name as written in the spec file
        header: String,
        /// Position in the value list
        index: usize,
        /// The matching value
        value: String,
    },
    /// Number of values differs; no positional comparison was made.
    CountMismatch {
        /// Header name as written in the spec file
        header: String,
        /// Expected values (empty when the header must be absent)
        expected: Vec<String>,
        /// Values the response carried
        actual: Vec<String>,
    },
    /// Value at `index` differs.
    ValueMismatch {
        /// Header name as written in the spec file
        header: String,
        /// Position in the value list
        index: usize,
        /// Expected value
        expected: String,
        /// Value the response carried
        actual: String,
    },
}

impl HeaderCheck {
    /// Header name this check is about.
    pub fn header(&self) -> &str {
        match self {
            HeaderCheck::Absent { header }
            | HeaderCheck::Matched { header, .. }
            | HeaderCheck::CountMismatch { header, .. }
            | HeaderCheck::ValueMismatch { header, .. } => header,
        }
    }

    /// Success or failure kind.
    pub fn verdict(&self) -> Verdict {
        match self {
            HeaderCheck::Absent { .. } | HeaderCheck::Matched { .. } => Verdict::Success,
            HeaderCheck::CountMismatch { .. } => Verdict::MissingOrUnexpectedExistence,
            HeaderCheck::ValueMismatch { .. } => Verdict::ValueMismatch,
        }
    }

    /// Error code this check contributes, if it failed.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self.verdict() {
            Verdict::Success => None,
            Verdict::MissingOrUnexpectedExistence => Some(ErrorCode::MissingResponseHeader),
            Verdict::ValueMismatch => Some(ErrorCode::FailAssertResponseHeaderValue),
        }
    }

    /// Whether the expectation was met.
    pub fn is_success(&self) -> bool {
        self.verdict() == Verdict::Success
    }
}

impl fmt::Display for HeaderCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderCheck::Absent { header } => write!(f, "{}: correctly absent", header),
            HeaderCheck::Matched {
                header,
                index,
                value,
            } => write!(f, "{}[{}]: '{}'", header, index, value),
            HeaderCheck::CountMismatch {
                header,
                expected,
                actual,
            } if expected.is_empty() => write!(
                f,
                "{}: expected to be absent, found {:?}",
                header, actual
            ),
            HeaderCheck::CountMismatch {
                header,
                expected,
                actual,
            } => write!(
                f,
                "{}: expected {} value(s) {:?}, found {} {:?}",
                header,
                expected.len(),
                expected,
                actual.len(),
                actual
            ),
            HeaderCheck::ValueMismatch {
                header,
                index,
                expected,
                actual,
            } => write!(
                f,
                "{}[{}]: expected '{}' instead of '{}'",
                header, index, expected, actual
            ),
        }
    }
}

/// Compares the expected values of one header with those a response carried.
///
/// `[""]` expects the header to be absent. When the value counts differ a
/// single `CountMismatch` is returned; otherwise every position is compared
/// (exact, case-sensitive) and reported, whether or not earlier ones failed.
pub fn evaluate(header: &str, expected: &[String], actual: &[String]) -> Vec<HeaderCheck> {
    let expected: &[String] = match expected {
        [only] if only.is_empty() => &[],
        _ => expected,
    };

    if actual.len() != expected.len() {
        return vec![HeaderCheck::CountMismatch {
            header: header.to_string(),
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }];
    }

    if expected.is_empty() {
        return vec![HeaderCheck::Absent {
            header: header.to_string(),
        }];
    }

    expected
        .iter()
        .zip(actual)
        .enumerate()
        .map(|(index, (want, got))| {
            if want == got {
                HeaderCheck::Matched {
                    header: header.to_string(),
                    index,
                    value: got.clone(),
                }
            } else {
                HeaderCheck::ValueMismatch {
                    header: header.to_string(),
                    index,
                    expected: want.clone(),
                    actual: got.clone(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn verdicts(checks: &[HeaderCheck]) -> Vec<Verdict> {
        checks.iter().map(HeaderCheck::verdict).collect()
    }

    #[test]
    fn test_must_be_absent_and_is() {
        let checks = evaluate("Set-Cookie", &values(&[""]), &[]);
        assert_eq!(
            checks,
            vec![HeaderCheck::Absent {
                header: "Set-Cookie".to_string()
            }]
        );
        assert_eq!(checks[0].error_code(), None);
    }

    #[test]
    fn test_must_be_absent_but_present() {
        let checks = evaluate("Set-Cookie", &values(&[""]), &values(&["id=1"]));
        assert_eq!(verdicts(&checks), vec![Verdict::MissingOrUnexpectedExistence]);
        assert_eq!(checks[0].error_code(), Some(ErrorCode::MissingResponseHeader));
        assert_eq!(
            checks[0].to_string(),
            "Set-Cookie: expected to be absent, found [\"id=1\"]"
        );
    }

    #[test]
    fn test_must_be_absent_but_present_with_empty_value() {
        // An empty header value still counts as presence
        let checks = evaluate("X-Empty", &values(&[""]), &values(&[""]));
        assert_eq!(verdicts(&checks), vec![Verdict::MissingOrUnexpectedExistence]);
    }

    #[test]
    fn test_all_positions_match() {
        let checks = evaluate("Vary", &values(&["a", "b"]), &values(&["a", "b"]));
        assert_eq!(verdicts(&checks), vec![Verdict::Success, Verdict::Success]);
        assert!(checks.iter().all(HeaderCheck::is_success));
    }

    #[test]
    fn test_mismatch_at_one_position() {
        let checks = evaluate("Vary", &values(&["a", "b"]), &values(&["a", "c"]));
        assert_eq!(
            verdicts(&checks),
            vec![Verdict::Success, Verdict::ValueMismatch]
        );
        assert_eq!(
            checks[1],
            HeaderCheck::ValueMismatch {
                header: "Vary".to_string(),
                index: 1,
                expected: "b".to_string(),
                actual: "c".to_string(),
            }
        );
        assert_eq!(
            checks[1].error_code(),
            Some(ErrorCode::FailAssertResponseHeaderValue)
        );
    }

    #[test]
    fn test_mismatch_does_not_short_circuit() {
        let checks = evaluate("Vary", &values(&["x", "b", "y"]), &values(&["a", "b", "c"]));
        assert_eq!(
            verdicts(&checks),
            vec![Verdict::ValueMismatch, Verdict::Success, Verdict::ValueMismatch]
        );
    }

    #[test]
    fn test_count_mismatch_skips_positions() {
        let checks = evaluate("Vary", &values(&["a", "b"]), &values(&["a"]));
        assert_eq!(
            checks,
            vec![HeaderCheck::CountMismatch {
                header: "Vary".to_string(),
                expected: values(&["a", "b"]),
                actual: values(&["a"]),
            }]
        );
    }

    #[test]
    fn test_missing_header() {
        let checks = evaluate("X-Frame-Options", &values(&["SAMEORIGIN"]), &[]);
        assert_eq!(verdicts(&checks), vec![Verdict::MissingOrUnexpectedExistence]);
        assert_eq!(checks[0].header(), "X-Frame-Options");
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let checks = evaluate(
            "X-Frame-Options",
            &values(&["SAMEORIGIN"]),
            &values(&["sameorigin"]),
        );
        assert_eq!(verdicts(&checks), vec![Verdict::ValueMismatch]);
        assert_eq!(
            checks[0].to_string(),
            "X-Frame-Options[0]: expected 'SAMEORIGIN' instead of 'sameorigin'"
        );
    }

    #[test]
    fn test_empty_expectation_list_means_absent() {
        assert_eq!(verdicts(&evaluate("X-A", &[], &[])), vec![Verdict::Success]);
        assert_eq!(
            verdicts(&evaluate("X-A", &[], &values(&["1"]))),
            vec![Verdict::MissingOrUnexpectedExistence]
        );
    }
}
