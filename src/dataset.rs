//! Prediction dataset: typed records, CSV loading and the process-wide cache.

pub mod cache;
pub mod loader;
pub mod record;

use std::path::{Path, PathBuf};

pub use loader::{DatasetLoadError, load_dataset, read_dataset};
pub use record::{RiskBucket, StartupRecord};

/// Location of the export relative to the project root.
pub const DEFAULT_DATA_PATH: &str = "data/processed/startup_risk_dashboard.csv";

/// Immutable, fully validated prediction table.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<StartupRecord>,
    has_state_code: bool,
    /// Headers of the columns outside the fixed schema, in file order.
    extra_headers: Vec<String>,
    source: PathBuf,
}

impl Dataset {
    /// Build a dataset from already-parsed rows.
    pub fn from_records(
        records: Vec<StartupRecord>,
        has_state_code: bool,
        source: impl Into<PathBuf>,
    ) -> Self {
        Self {
            records,
            has_state_code,
            extra_headers: Vec::new(),
            source: source.into(),
        }
    }

    /// Attach the names of pass-through columns. Each record's `extra` cells
    /// line up with these headers.
    pub fn with_extra_headers(mut self, headers: Vec<String>) -> Self {
        self.extra_headers = headers;
        self
    }

    /// Rows in file order.
    pub fn records(&self) -> &[StartupRecord] {
        &self.records
    }

    /// Row count before any filtering.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the export carried a `state_code` column at all.
    pub fn has_state_code(&self) -> bool {
        self.has_state_code
    }

    /// Columns kept verbatim for the data table.
    pub fn extra_headers(&self) -> &[String] {
        &self.extra_headers
    }

    /// File the rows were read from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Pick the CSV to load.
///
/// An explicit path wins. Otherwise [`DEFAULT_DATA_PATH`] is tried under the
/// working directory, then under the crate root. When neither exists the
/// working-directory path is returned so the open error names it.
pub fn resolve_data_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let local = PathBuf::from(DEFAULT_DATA_PATH);
    if local.is_file() {
        return local;
    }
    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_PATH);
    if bundled.is_file() {
        return bundled;
    }
    local
}
