//! One-time, process-wide dataset holder.
//!
//! The first successful load wins for the rest of the process. Later calls
//! hand back the same `&'static Dataset` without touching the file system.

use std::path::Path;
use std::sync::OnceLock;

use super::{Dataset, DatasetLoadError, load_dataset};

static SHARED: OnceLock<Dataset> = OnceLock::new();

/// Load `path` once and return the shared dataset.
///
/// Failed loads are not cached, so a later call retries the file.
pub fn load_shared(path: &Path) -> Result<&'static Dataset, DatasetLoadError> {
    if let Some(dataset) = SHARED.get() {
        if dataset.source() != path {
            tracing::warn!(
                requested = %path.display(),
                cached = %dataset.source().display(),
                "Dataset already loaded; ignoring new path"
            );
        }
        tracing::debug!("Dataset cache hit");
        return Ok(dataset);
    }
    let loaded = load_dataset(path)?;
    tracing::info!(
        path = %path.display(),
        rows = loaded.len(),
        "Dataset loaded"
    );
    Ok(SHARED.get_or_init(|| loaded))
}

/// The cached dataset, if one has been loaded.
pub fn shared() -> Option<&'static Dataset> {
    SHARED.get()
}
