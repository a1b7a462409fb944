//! CSV loader for the prediction export.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use super::Dataset;
use super::record::{RiskBucket, StartupRecord};

pub const NAME: &str = "name";
pub const STATE_CODE: &str = "state_code";
pub const FUNDING_TOTAL_USD: &str = "funding_total_usd";
pub const FUNDING_ROUNDS: &str = "funding_rounds";
pub const MILESTONES: &str = "milestones";
pub const RELATIONSHIPS: &str = "relationships";
pub const IS_TOP500: &str = "is_top500";
pub const TARGET_FAILURE: &str = "target_failure";
pub const PRED_FAILURE_PROB_RF: &str = "pred_failure_prob_rf";
pub const RISK_BUCKET_RF: &str = "risk_bucket_rf";

/// Columns that must be present in every export. `state_code` is optional.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    NAME,
    FUNDING_TOTAL_USD,
    FUNDING_ROUNDS,
    MILESTONES,
    RELATIONSHIPS,
    IS_TOP500,
    TARGET_FAILURE,
    PRED_FAILURE_PROB_RF,
    RISK_BUCKET_RF,
];

#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Dataset {path} has no header row")]
    EmptyHeader { path: PathBuf },
    #[error("Malformed CSV in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("Dataset {path} is missing required column `{column}`")]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("Dataset {path}, row {row}, column `{column}`: {reason} (got {value:?})")]
    InvalidValue {
        path: PathBuf,
        /// 1-based data row, not counting the header.
        row: usize,
        column: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Header positions resolved once per file.
#[derive(Debug, Clone)]
struct ColumnIndex {
    name: usize,
    state_code: Option<usize>,
    funding_total_usd: usize,
    funding_rounds: usize,
    milestones: usize,
    relationships: usize,
    is_top500: usize,
    target_failure: usize,
    pred_failure_prob_rf: usize,
    risk_bucket_rf: usize,
    /// Positions of every other column, in file order.
    extra: Vec<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, path: &Path) -> Result<Self, DatasetLoadError> {
        let find = |column: &str| headers.iter().position(|header| header == column);
        let require = |column: &'static str| {
            find(column).ok_or_else(|| DatasetLoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            })
        };
        let mut index = Self {
            name: require(NAME)?,
            state_code: find(STATE_CODE),
            funding_total_usd: require(FUNDING_TOTAL_USD)?,
            funding_rounds: require(FUNDING_ROUNDS)?,
            milestones: require(MILESTONES)?,
            relationships: require(RELATIONSHIPS)?,
            is_top500: require(IS_TOP500)?,
            target_failure: require(TARGET_FAILURE)?,
            pred_failure_prob_rf: require(PRED_FAILURE_PROB_RF)?,
            risk_bucket_rf: require(RISK_BUCKET_RF)?,
            extra: Vec::new(),
        };
        let known = index.known_positions();
        index.extra = (0..headers.len())
            .filter(|position| !known.contains(position))
            .collect();
        Ok(index)
    }

    fn known_positions(&self) -> Vec<usize> {
        let mut known = vec![
            self.name,
            self.funding_total_usd,
            self.funding_rounds,
            self.milestones,
            self.relationships,
            self.is_top500,
            self.target_failure,
            self.pred_failure_prob_rf,
            self.risk_bucket_rf,
        ];
        known.extend(self.state_code);
        known
    }

    fn extra_headers(&self, headers: &StringRecord) -> Vec<String> {
        self.extra
            .iter()
            .map(|&position| headers.get(position).unwrap_or("").to_string())
            .collect()
    }
}

/// Read and validate the CSV at `path`. The file handle is closed on return.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetLoadError> {
    let file = File::open(path).map_err(|source| DatasetLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_dataset(BufReader::new(file), path)
}

/// Parse CSV from any reader; `path` is only used for diagnostics.
pub fn read_dataset<R: Read>(reader: R, path: &Path) -> Result<Dataset, DatasetLoadError> {
    let csv_error = |source: csv::Error| DatasetLoadError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(DatasetLoadError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }
    let columns = ColumnIndex::resolve(&headers, path)?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        let cells = RowCells {
            row: &row,
            row_number: idx + 1,
            path,
        };
        records.push(cells.parse(&columns)?);
    }

    tracing::debug!(
        path = %path.display(),
        rows = records.len(),
        has_state_code = columns.state_code.is_some(),
        extra_columns = columns.extra.len(),
        "Parsed dataset"
    );
    Ok(Dataset::from_records(records, columns.state_code.is_some(), path)
        .with_extra_headers(columns.extra_headers(&headers)))
}

// Whole floats inside these bounds convert to `i64` without saturating.
const I64_LOWER: f64 = i64::MIN as f64;
const I64_UPPER_EXCLUSIVE: f64 = 9_223_372_036_854_775_808.0;

struct RowCells<'a> {
    row: &'a StringRecord,
    row_number: usize,
    path: &'a Path,
}

impl RowCells<'_> {
    fn parse(&self, columns: &ColumnIndex) -> Result<StartupRecord, DatasetLoadError> {
        let funding_total_usd = self.number(columns.funding_total_usd, FUNDING_TOTAL_USD)?;
        if funding_total_usd < 0.0 {
            return Err(self.invalid(
                columns.funding_total_usd,
                FUNDING_TOTAL_USD,
                "funding must be non-negative",
            ));
        }
        let pred_failure_prob_rf = self.number(columns.pred_failure_prob_rf, PRED_FAILURE_PROB_RF)?;
        if !(0.0..=1.0).contains(&pred_failure_prob_rf) {
            return Err(self.invalid(
                columns.pred_failure_prob_rf,
                PRED_FAILURE_PROB_RF,
                "probability must be within [0, 1]",
            ));
        }
        let risk_bucket_rf = self
            .cell(columns.risk_bucket_rf)
            .parse::<RiskBucket>()
            .map_err(|_| {
                self.invalid(
                    columns.risk_bucket_rf,
                    RISK_BUCKET_RF,
                    "expected Low, Medium or High",
                )
            })?;

        Ok(StartupRecord {
            name: self.text(Some(columns.name)),
            state_code: self.text(columns.state_code),
            funding_total_usd,
            funding_rounds: self.integer(columns.funding_rounds, FUNDING_ROUNDS)?,
            milestones: self.integer(columns.milestones, MILESTONES)?,
            relationships: self.integer(columns.relationships, RELATIONSHIPS)?,
            is_top500: self.flag(columns.is_top500, IS_TOP500)?,
            target_failure: self.flag(columns.target_failure, TARGET_FAILURE)?,
            pred_failure_prob_rf,
            risk_bucket_rf,
            extra: columns
                .extra
                .iter()
                .map(|&position| self.cell(position).to_string())
                .collect(),
        })
    }

    fn cell(&self, index: usize) -> &str {
        self.row.get(index).unwrap_or("")
    }

    fn text(&self, index: Option<usize>) -> Option<String> {
        let value = self.cell(index?);
        (!value.is_empty()).then(|| value.to_string())
    }

    fn number(&self, index: usize, column: &'static str) -> Result<f64, DatasetLoadError> {
        self.cell(index)
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| self.invalid(index, column, "expected a number"))
    }

    /// Accepts `3` as well as `3.0`, which pandas writes for float-typed columns.
    fn integer(&self, index: usize, column: &'static str) -> Result<i64, DatasetLoadError> {
        let raw = self.cell(index);
        if let Ok(value) = raw.parse::<i64>() {
            return Ok(value);
        }
        raw.parse::<f64>()
            .ok()
            .filter(|value| {
                value.fract() == 0.0 && (I64_LOWER..I64_UPPER_EXCLUSIVE).contains(value)
            })
            .map(|value| value as i64)
            .ok_or_else(|| self.invalid(index, column, "expected an integer"))
    }

    fn flag(&self, index: usize, column: &'static str) -> Result<bool, DatasetLoadError> {
        match self.cell(index).to_ascii_lowercase().as_str() {
            "1" | "1.0" | "true" => Ok(true),
            "0" | "0.0" | "false" => Ok(false),
            _ => Err(self.invalid(index, column, "expected a 0/1 flag")),
        }
    }

    fn invalid(&self, index: usize, column: &'static str, reason: &'static str) -> DatasetLoadError {
        DatasetLoadError::InvalidValue {
            path: self.path.to_path_buf(),
            row: self.row_number,
            column,
            value: self.cell(index).to_string(),
            reason,
        }
    }
}
