//! Pure dashboard computations over the immutable dataset.
//!
//! Every user interaction maps to one [`render`] call: filters, KPIs, chart
//! data, the startup detail and the sorted table are all rebuilt from the
//! cached rows plus the current [`DashboardQuery`].

pub mod charts;
pub mod detail;
pub mod filter;
pub mod format;
pub mod metrics;
pub mod table;
mod view;

pub use charts::{HISTOGRAM_BINS, HistogramBin, ScatterPoint, ScatterSeries};
pub use detail::StartupDetail;
pub use filter::{FilterSelection, RegionFilter, RiskFilter};
pub use metrics::PortfolioKpis;
pub use table::{TableColumn, TableSort};
pub use view::{DashboardQuery, DashboardView, EMPTY_NOTICE, PortfolioView, render};

#[cfg(test)]
pub(crate) mod test_rows {
    use crate::dataset::{Dataset, RiskBucket, StartupRecord};

    pub(crate) fn record(
        name: &str,
        state: Option<&str>,
        probability: f64,
        bucket: RiskBucket,
        failed: bool,
    ) -> StartupRecord {
        StartupRecord {
            name: Some(name.to_string()),
            state_code: state.map(str::to_string),
            funding_total_usd: 1_000_000.0,
            funding_rounds: 2,
            milestones: 3,
            relationships: 5,
            is_top500: false,
            target_failure: failed,
            pred_failure_prob_rf: probability,
            risk_bucket_rf: bucket,
            extra: Vec::new(),
        }
    }

    /// A (CA, 0.8, High, failed), B (CA, 0.2, Low, ok), C (NY, 0.5, Medium, failed).
    pub(crate) fn scenario_dataset() -> Dataset {
        Dataset::from_records(
            vec![
                record("A", Some("CA"), 0.8, RiskBucket::High, true),
                record("B", Some("CA"), 0.2, RiskBucket::Low, false),
                record("C", Some("NY"), 0.5, RiskBucket::Medium, true),
            ],
            true,
            "scenario.csv",
        )
    }
}
