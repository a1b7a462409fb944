use std::fmt;
use std::str::FromStr;

/// Pre-binned risk category attached to each prediction upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskBucket {
    Low,
    Medium,
    High,
}

impl RiskBucket {
    /// Buckets in ascending risk order, as offered by the filter selector.
    pub const ALL: [RiskBucket; 3] = [RiskBucket::Low, RiskBucket::Medium, RiskBucket::High];

    pub fn label(self) -> &'static str {
        match self {
            RiskBucket::Low => "Low",
            RiskBucket::Medium => "Medium",
            RiskBucket::High => "High",
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a cell is not one of `Low`, `Medium`, `High`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown risk bucket {0:?}")]
pub struct UnknownRiskBucket(pub String);

impl FromStr for RiskBucket {
    type Err = UnknownRiskBucket;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        RiskBucket::ALL
            .into_iter()
            .find(|bucket| bucket.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownRiskBucket(trimmed.to_string()))
    }
}

/// One row of the prediction dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct StartupRecord {
    /// Display name; `None` when the cell was empty.
    pub name: Option<String>,
    /// Two-letter region code; `None` when empty or the column is absent.
    pub state_code: Option<String>,
    pub funding_total_usd: f64,
    pub funding_rounds: i64,
    pub milestones: i64,
    pub relationships: i64,
    pub is_top500: bool,
    /// Ground truth: the startup closed.
    pub target_failure: bool,
    /// Random Forest failure probability in `[0, 1]`.
    pub pred_failure_prob_rf: f64,
    pub risk_bucket_rf: RiskBucket,
    /// Raw cells of the extra columns, aligned with `Dataset::extra_headers`.
    pub extra: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_buckets_case_insensitively() {
        assert_eq!("High".parse::<RiskBucket>(), Ok(RiskBucket::High));
        assert_eq!(" medium ".parse::<RiskBucket>(), Ok(RiskBucket::Medium));
        assert_eq!("LOW".parse::<RiskBucket>(), Ok(RiskBucket::Low));
    }

    #[test]
    fn rejects_unknown_bucket() {
        assert_eq!(
            "Extreme".parse::<RiskBucket>(),
            Err(UnknownRiskBucket("Extreme".into()))
        );
    }

    #[test]
    fn buckets_order_by_risk() {
        assert!(RiskBucket::Low < RiskBucket::Medium);
        assert!(RiskBucket::Medium < RiskBucket::High);
    }
}
