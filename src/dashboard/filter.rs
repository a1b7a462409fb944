use std::collections::BTreeSet;

use crate::dataset::{Dataset, RiskBucket, StartupRecord};

/// Label shown for the unconstrained choice of either selector.
pub const ALL_LABEL: &str = "All";

/// Region predicate; `State` matches `state_code` exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegionFilter {
    #[default]
    All,
    State(String),
}

impl RegionFilter {
    /// Combo box text: `All` or the state code.
    pub fn label(&self) -> &str {
        match self {
            RegionFilter::All => ALL_LABEL,
            RegionFilter::State(code) => code,
        }
    }

    pub fn matches(&self, record: &StartupRecord) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::State(code) => record.state_code.as_deref() == Some(code.as_str()),
        }
    }
}

/// Risk bucket predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RiskFilter {
    #[default]
    All,
    Bucket(RiskBucket),
}

impl RiskFilter {
    /// Selector entries in display order.
    pub const OPTIONS: [RiskFilter; 4] = [
        RiskFilter::All,
        RiskFilter::Bucket(RiskBucket::Low),
        RiskFilter::Bucket(RiskBucket::Medium),
        RiskFilter::Bucket(RiskBucket::High),
    ];

    /// Combo box text: `All` or the bucket name.
    pub fn label(self) -> &'static str {
        match self {
            RiskFilter::All => ALL_LABEL,
            RiskFilter::Bucket(bucket) => bucket.label(),
        }
    }

    pub fn matches(self, record: &StartupRecord) -> bool {
        match self {
            RiskFilter::All => true,
            RiskFilter::Bucket(bucket) => record.risk_bucket_rf == bucket,
        }
    }
}

/// Current values of the two sidebar selectors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    pub region: RegionFilter,
    pub risk: RiskFilter,
}

impl FilterSelection {
    pub fn new(region: RegionFilter, risk: RiskFilter) -> Self {
        Self { region, risk }
    }

    /// Region predicate actually applied: always `All` without a `state_code` column.
    pub fn effective_region<'a>(&'a self, dataset: &Dataset) -> &'a RegionFilter {
        static UNCONSTRAINED: RegionFilter = RegionFilter::All;
        if dataset.has_state_code() {
            &self.region
        } else {
            &UNCONSTRAINED
        }
    }
}

/// Region selector entries: `All` then the sorted distinct state codes.
///
/// Returns `None` when the dataset has no `state_code` column, which disables
/// the selector.
pub fn region_options(dataset: &Dataset) -> Option<Vec<RegionFilter>> {
    if !dataset.has_state_code() {
        return None;
    }
    let codes: BTreeSet<&str> = dataset
        .records()
        .iter()
        .filter_map(|record| record.state_code.as_deref())
        .collect();
    let mut options = Vec::with_capacity(codes.len() + 1);
    options.push(RegionFilter::All);
    options.extend(codes.into_iter().map(|code| RegionFilter::State(code.to_string())));
    Some(options)
}

/// Rows matching both predicates, in dataset order.
pub fn apply_filters<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> Vec<&'a StartupRecord> {
    let region = selection.effective_region(dataset);
    dataset
        .records()
        .iter()
        .filter(|record| region.matches(record) && selection.risk.matches(record))
        .collect()
}
