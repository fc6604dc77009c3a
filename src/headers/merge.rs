//! Header map merging.

use crate::spec::{Headers, MergedHeaders};

/// Merges header maps, lowest priority first.
///
/// A header present with a non-null value list in a later map replaces the
/// whole list from earlier maps; value lists are never combined. Absent or
/// `null` entries leave earlier values untouched.
pub fn merge(layers: &[&Headers]) -> MergedHeaders {
    let mut merged = MergedHeaders::new();
    for layer in layers {
        for (name, values) in layer.iter() {
            if let Some(values) = values {
                merged.insert(name.clone(), values.clone());
            }
        }
    }
    merged
}
