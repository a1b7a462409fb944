//! Column model and stable ordering for the underlying-data table.

use std::cmp::Ordering;

use crate::dataset::{Dataset, StartupRecord};

use super::format;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableColumn {
    Name,
    State,
    FundingTotal,
    FundingRounds,
    Milestones,
    Relationships,
    Top500,
    Actual,
    Probability,
    Bucket,
    /// Pass-through CSV column, indexing `Dataset::extra_headers`.
    Extra(usize),
}

impl TableColumn {
    /// The typed columns, shown first in this order.
    pub const FIXED: [TableColumn; 10] = [
        TableColumn::Name,
        TableColumn::State,
        TableColumn::FundingTotal,
        TableColumn::FundingRounds,
        TableColumn::Milestones,
        TableColumn::Relationships,
        TableColumn::Top500,
        TableColumn::Actual,
        TableColumn::Probability,
        TableColumn::Bucket,
    ];

    /// Fixed columns followed by one column per extra CSV header.
    pub fn for_dataset(dataset: &Dataset) -> Vec<TableColumn> {
        Self::FIXED
            .into_iter()
            .chain((0..dataset.extra_headers().len()).map(TableColumn::Extra))
            .collect()
    }

    /// Header text; matches the CSV column names.
    pub fn header(self, dataset: &Dataset) -> &str {
        match self {
            TableColumn::Name => "name",
            TableColumn::State => "state_code",
            TableColumn::FundingTotal => "funding_total_usd",
            TableColumn::FundingRounds => "funding_rounds",
            TableColumn::Milestones => "milestones",
            TableColumn::Relationships => "relationships",
            TableColumn::Top500 => "is_top500",
            TableColumn::Actual => "target_failure",
            TableColumn::Probability => "pred_failure_prob_rf",
            TableColumn::Bucket => "risk_bucket_rf",
            TableColumn::Extra(idx) => dataset
                .extra_headers()
                .get(idx)
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Display text for `record` in this column.
    pub fn cell(self, record: &StartupRecord) -> String {
        match self {
            TableColumn::Name => record.name.clone().unwrap_or_default(),
            TableColumn::State => record.state_code.clone().unwrap_or_default(),
            TableColumn::FundingTotal => format::usd(record.funding_total_usd),
            TableColumn::FundingRounds => record.funding_rounds.to_string(),
            TableColumn::Milestones => record.milestones.to_string(),
            TableColumn::Relationships => record.relationships.to_string(),
            TableColumn::Top500 => u8::from(record.is_top500).to_string(),
            TableColumn::Actual => u8::from(record.target_failure).to_string(),
            TableColumn::Probability => format!("{:.4}", record.pred_failure_prob_rf),
            TableColumn::Bucket => record.risk_bucket_rf.to_string(),
            TableColumn::Extra(idx) => record.extra.get(idx).cloned().unwrap_or_default(),
        }
    }

    /// Ascending comparison of two rows on this column.
    fn compare(self, a: &StartupRecord, b: &StartupRecord) -> Ordering {
        match self {
            TableColumn::Name => a.name.cmp(&b.name),
            TableColumn::State => a.state_code.cmp(&b.state_code),
            TableColumn::FundingTotal => a.funding_total_usd.total_cmp(&b.funding_total_usd),
            TableColumn::FundingRounds => a.funding_rounds.cmp(&b.funding_rounds),
            TableColumn::Milestones => a.milestones.cmp(&b.milestones),
            TableColumn::Relationships => a.relationships.cmp(&b.relationships),
            TableColumn::Top500 => a.is_top500.cmp(&b.is_top500),
            TableColumn::Actual => a.target_failure.cmp(&b.target_failure),
            TableColumn::Probability => a.pred_failure_prob_rf.total_cmp(&b.pred_failure_prob_rf),
            TableColumn::Bucket => a.risk_bucket_rf.cmp(&b.risk_bucket_rf),
            TableColumn::Extra(idx) => a.extra.get(idx).cmp(&b.extra.get(idx)),
        }
    }
}

/// Active table ordering. Defaults to predicted probability, highest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableSort {
    pub column: TableColumn,
    pub descending: bool,
}

impl Default for TableSort {
    fn default() -> Self {
        Self {
            column: TableColumn::Probability,
            descending: true,
        }
    }
}

impl TableSort {
    /// Header click: flip direction on the active column, otherwise switch to
    /// `column` sorted descending.
    pub fn toggled(self, column: TableColumn) -> Self {
        if self.column == column {
            Self {
                column,
                descending: !self.descending,
            }
        } else {
            Self {
                column,
                descending: true,
            }
        }
    }

    /// Stable sort: equal keys keep their incoming order in both directions.
    pub fn apply(self, rows: &mut [&StartupRecord]) {
        rows.sort_by(|a, b| {
            let ordering = self.column.compare(a, b);
            if self.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }
}
