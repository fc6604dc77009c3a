//! Spec file loading.

use std::path::Path;

use log::debug;

use super::SpecContainer;
use crate::error_handling::SpecLoadError;

/// Reads and parses a spec file.
///
/// # Errors
///
/// `SpecLoadError::Read` if the file cannot be read, `SpecLoadError::Parse`
/// if its contents are not a spec container.
pub async fn load_spec_file(path: &Path) -> Result<SpecContainer, SpecLoadError> {
    let raw = tokio::fs::read(path)
        .await
        .map_err(|source| SpecLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    // A bare `null` document is an empty container
    let container = serde_json::from_slice::<Option<SpecContainer>>(&raw)
        .map_err(|source| SpecLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .unwrap_or_default();

    debug!(
        "Loaded {} spec(s) from {}",
        container.specs.len(),
        path.display()
    );
    Ok(container)
}
