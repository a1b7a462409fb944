use crate::dataset::{RiskBucket, StartupRecord};

use super::format;

/// Headline numbers for the filtered portfolio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioKpis {
    pub total: usize,
    /// Mean of `target_failure`.
    pub actual_failure_rate: f64,
    /// Mean of `pred_failure_prob_rf`.
    pub avg_predicted_failure: f64,
    pub high_risk_count: usize,
}

impl PortfolioKpis {
    /// Aggregate a filtered subset. Means are `0.0` for an empty slice.
    pub fn compute(rows: &[&StartupRecord]) -> Self {
        let total = rows.len();
        let failures = rows.iter().filter(|row| row.target_failure).count();
        let predicted: f64 = rows.iter().map(|row| row.pred_failure_prob_rf).sum();
        let high_risk_count = rows
            .iter()
            .filter(|row| row.risk_bucket_rf == RiskBucket::High)
            .count();
        let mean = |sum: f64| if total == 0 { 0.0 } else { sum / total as f64 };
        Self {
            total,
            actual_failure_rate: mean(failures as f64),
            avg_predicted_failure: mean(predicted),
            high_risk_count,
        }
    }

    /// `(title, value)` pairs for the four KPI cards.
    pub fn cards(&self) -> [(&'static str, String); 4] {
        [
            ("Startups (filtered)", format::thousands(self.total as u64)),
            ("Actual failure rate", format::percent(self.actual_failure_rate)),
            (
                "Avg predicted failure prob.",
                format::percent(self.avg_predicted_failure),
            ),
            (
                "High-risk startups (RF)",
                format::thousands(self.high_risk_count as u64),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::filter::{FilterSelection, RegionFilter, RiskFilter, apply_filters};
    use crate::dashboard::test_rows::scenario_dataset;

    #[test]
    fn california_scenario_aggregates() {
        let dataset = scenario_dataset();
        let selection = FilterSelection::new(RegionFilter::State("CA".into()), RiskFilter::All);
        let rows = apply_filters(&dataset, &selection);
        let kpis = PortfolioKpis::compute(&rows);
        assert_eq!(kpis.total, 2);
        assert!((kpis.actual_failure_rate - 0.5).abs() < 1e-12);
        assert!((kpis.avg_predicted_failure - 0.5).abs() < 1e-12);
        assert_eq!(kpis.high_risk_count, 1);
    }

    #[test]
    fn empty_subset_yields_zero_means() {
        let kpis = PortfolioKpis::compute(&[]);
        assert_eq!(kpis.total, 0);
        assert_eq!(kpis.actual_failure_rate, 0.0);
        assert_eq!(kpis.avg_predicted_failure, 0.0);
        assert_eq!(kpis.high_risk_count, 0);
    }

    #[test]
    fn cards_format_counts_and_rates() {
        let kpis = PortfolioKpis {
            total: 1234,
            actual_failure_rate: 0.5,
            avg_predicted_failure: 0.4567,
            high_risk_count: 7,
        };
        let cards = kpis.cards();
        assert_eq!(cards[0].1, "1,234");
        assert_eq!(cards[1].1, "50.0%");
        assert_eq!(cards[2].1, "45.7%");
        assert_eq!(cards[3].1, "7");
    }
}
