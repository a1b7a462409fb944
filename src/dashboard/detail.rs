//! Single-startup lookup for the detail panel.

use std::collections::HashSet;

use crate::dataset::{RiskBucket, StartupRecord};

use super::format;

/// Everything the detail panel shows for one startup.
#[derive(Clone, Debug, PartialEq)]
pub struct StartupDetail {
    pub name: String,
    pub probability: f64,
    pub target_failure: bool,
    pub bucket: RiskBucket,
    pub state_code: Option<String>,
    pub funding_rounds: i64,
    pub funding_total_usd: f64,
    pub milestones: i64,
    pub relationships: i64,
    pub is_top500: bool,
}

impl StartupDetail {
    fn from_record(name: &str, record: &StartupRecord) -> Self {
        Self {
            name: name.to_string(),
            probability: record.pred_failure_prob_rf,
            target_failure: record.target_failure,
            bucket: record.risk_bucket_rf,
            state_code: record.state_code.clone(),
            funding_rounds: record.funding_rounds,
            funding_total_usd: record.funding_total_usd,
            milestones: record.milestones,
            relationships: record.relationships,
            is_top500: record.is_top500,
        }
    }

    pub fn actual_label(&self) -> &'static str {
        format::outcome(self.target_failure)
    }

    pub fn probability_text(&self) -> String {
        format::percent(self.probability)
    }

    pub fn state_text(&self) -> &str {
        self.state_code.as_deref().unwrap_or("n/a")
    }

    pub fn top500_text(&self) -> &'static str {
        format::yes_no(self.is_top500)
    }

    /// Label/value pairs for the context grid under the headline metrics.
    pub fn context_fields(&self) -> [(&'static str, String); 6] {
        [
            ("State", self.state_text().to_string()),
            ("Funding rounds", format::thousands_signed(self.funding_rounds)),
            ("Total funding (USD)", format::usd(self.funding_total_usd)),
            ("Milestones", format::thousands_signed(self.milestones)),
            ("Relationships", format::thousands_signed(self.relationships)),
            ("Top 500 startup?", self.top500_text().to_string()),
        ]
    }
}

/// Distinct, non-missing names in row order; the startup selector's entries.
pub fn startup_options(rows: &[&StartupRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter_map(|row| row.name.as_deref())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Keep `requested` if it is still offered, otherwise fall back to the first option.
pub fn resolve_selection(options: &[String], requested: Option<&str>) -> Option<String> {
    requested
        .and_then(|name| options.iter().find(|option| option.as_str() == name))
        .or_else(|| options.first())
        .cloned()
}

/// First row named `name`.
pub fn lookup(rows: &[&StartupRecord], name: &str) -> Option<StartupDetail> {
    rows.iter()
        .find(|row| row.name.as_deref() == Some(name))
        .map(|row| StartupDetail::from_record(name, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::test_rows::{record, scenario_dataset};

    #[test]
    fn detail_for_a_reports_failure_and_high_bucket() {
        let dataset = scenario_dataset();
        let rows: Vec<&StartupRecord> = dataset.records().iter().collect();
        let detail = lookup(&rows, "A").unwrap();
        assert_eq!(detail.probability, 0.8);
        assert_eq!(detail.actual_label(), "Failure (closed)");
        assert_eq!(detail.bucket, RiskBucket::High);
        assert_eq!(detail.probability_text(), "80.0%");
    }

    #[test]
    fn successful_startup_is_labelled_acquired() {
        let dataset = scenario_dataset();
        let rows: Vec<&StartupRecord> = dataset.records().iter().collect();
        let detail = lookup(&rows, "B").unwrap();
        assert_eq!(detail.actual_label(), "Success (acquired)");
        assert_eq!(detail.top500_text(), "No");
    }

    #[test]
    fn duplicate_names_resolve_to_first_row() {
        let mut first = record("Twin", Some("CA"), 0.9, RiskBucket::High, true);
        first.funding_rounds = 4;
        let second = record("Twin", Some("NY"), 0.1, RiskBucket::Low, false);
        let owned = [first, second];
        let rows: Vec<&StartupRecord> = owned.iter().collect();
        assert_eq!(startup_options(&rows), ["Twin"]);
        let detail = lookup(&rows, "Twin").unwrap();
        assert_eq!(detail.state_text(), "CA");
        assert_eq!(detail.funding_rounds, 4);
    }

    #[test]
    fn options_skip_missing_names() {
        let mut unnamed = record("", None, 0.3, RiskBucket::Low, false);
        unnamed.name = None;
        let named = record("Named", None, 0.3, RiskBucket::Low, false);
        let owned = [unnamed, named];
        let rows: Vec<&StartupRecord> = owned.iter().collect();
        assert_eq!(startup_options(&rows), ["Named"]);
    }

    #[test]
    fn selection_falls_back_to_first_option() {
        let options = vec!["A".to_string(), "B".to_string()];
        assert_eq!(resolve_selection(&options, Some("B")), Some("B".into()));
        assert_eq!(resolve_selection(&options, Some("Z")), Some("A".into()));
        assert_eq!(resolve_selection(&options, None), Some("A".into()));
        assert_eq!(resolve_selection(&[], Some("A")), None);
    }

    #[test]
    fn context_fields_format_numbers() {
        let mut row = record("A", None, 0.8, RiskBucket::High, true);
        row.funding_total_usd = 2_500_000.0;
        row.is_top500 = true;
        let detail = lookup(&[&row], "A").unwrap();
        let fields = detail.context_fields();
        assert_eq!(fields[0], ("State", "n/a".to_string()));
        assert_eq!(fields[2], ("Total funding (USD)", "2,500,000".to_string()));
        assert_eq!(fields[5], ("Top 500 startup?", "Yes".to_string()));
    }
}
