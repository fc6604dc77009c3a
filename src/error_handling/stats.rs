//! Error code tallies for the end-of-run summary.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::types::ErrorCode;

/// Counts of each error code produced during a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorTally {
    counts: HashMap<ErrorCode, usize>,
}

impl ErrorTally {
    /// Tallies a sequence of error codes.
    pub fn from_codes(codes: &[ErrorCode]) -> Self {
        let mut counts = HashMap::new();
        for code in codes {
            *counts.entry(*code).or_insert(0) += 1;
        }
        ErrorTally { counts }
    }

    /// Number of times `code` was produced.
    pub fn get(&self, code: ErrorCode) -> usize {
        self.counts.get(&code).copied().unwrap_or(0)
    }

    /// Total number of codes.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts in exit code order.
    pub fn non_zero(&self) -> Vec<(ErrorCode, usize)> {
        ErrorCode::iter()
            .map(|code| (code, self.get(code)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
