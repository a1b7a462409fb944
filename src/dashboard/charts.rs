//! Chart series derived from the filtered rows.

use crate::dataset::{RiskBucket, StartupRecord};

use super::format;

/// Bin count of the predicted-probability histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// One histogram bar covering `[start, end)`; the last bar also includes `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Equal-width histogram of `pred_failure_prob_rf` over its observed range.
///
/// A range of zero width produces a single bin holding every row.
pub fn probability_histogram(rows: &[&StartupRecord], bins: usize) -> Vec<HistogramBin> {
    let Some((min, max)) = observed_range(rows.iter().map(|row| row.pred_failure_prob_rf)) else {
        return Vec::new();
    };
    if bins <= 1 || max <= min {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: rows.len(),
        }];
    }
    let edges = bin_edges(min, max, bins);
    let mut out: Vec<HistogramBin> = edges
        .windows(2)
        .map(|pair| HistogramBin {
            start: pair[0],
            end: pair[1],
            count: 0,
        })
        .collect();
    for row in rows {
        out[bin_index(&edges, row.pred_failure_prob_rf)].count += 1;
    }
    out
}

/// `bins + 1` ascending edges; the last one is exactly `max`.
fn bin_edges(min: f64, max: f64, bins: usize) -> Vec<f64> {
    let width = (max - min) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|idx| min + idx as f64 * width).collect();
    edges.push(max);
    edges
}

/// Bin whose `[start, end)` holds `value`, located with the same edges the
/// bins report. Values at or past the last edge go to the last bin.
fn bin_index(edges: &[f64], value: f64) -> usize {
    let bins = edges.len().saturating_sub(1);
    edges
        .partition_point(|edge| *edge <= value)
        .saturating_sub(1)
        .min(bins.saturating_sub(1))
}

fn observed_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |range, value| match range {
        None => Some((value, value)),
        Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
    })
}

/// A startup placed on the funding (log10) vs. probability plane.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
    /// `log10(funding_total_usd)`.
    pub log_funding: f64,
    pub funding_total_usd: f64,
    pub probability: f64,
    pub bucket: RiskBucket,
    pub name: Option<String>,
    pub state_code: Option<String>,
}

impl ScatterPoint {
    /// Hover text: name, state, funding, probability and bucket.
    pub fn tooltip_lines(&self) -> [String; 5] {
        [
            format!("Name: {}", self.name.as_deref().unwrap_or("n/a")),
            format!("State: {}", self.state_code.as_deref().unwrap_or("n/a")),
            format!("Total funding (USD): {}", format::usd(self.funding_total_usd)),
            format!(
                "Predicted failure probability (RF): {}",
                format::percent(self.probability)
            ),
            format!("Risk bucket (RF): {}", self.bucket),
        ]
    }
}

/// Points for the funding vs. risk chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatterSeries {
    pub points: Vec<ScatterPoint>,
    /// Rows with zero funding, which have no position on a log axis.
    pub omitted: usize,
    /// Min/max of `log_funding`, `None` when there are no points.
    pub log_funding_range: Option<(f64, f64)>,
}

pub fn funding_scatter(rows: &[&StartupRecord]) -> ScatterSeries {
    let mut omitted = 0;
    let points: Vec<ScatterPoint> = rows
        .iter()
        .filter_map(|row| {
            if row.funding_total_usd <= 0.0 {
                omitted += 1;
                return None;
            }
            Some(ScatterPoint {
                log_funding: row.funding_total_usd.log10(),
                funding_total_usd: row.funding_total_usd,
                probability: row.pred_failure_prob_rf,
                bucket: row.risk_bucket_rf,
                name: row.name.clone(),
                state_code: row.state_code.clone(),
            })
        })
        .collect();
    let log_funding_range = observed_range(points.iter().map(|point| point.log_funding));
    ScatterSeries {
        points,
        omitted,
        log_funding_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::test_rows::{record, scenario_dataset};

    fn rows_with_probabilities(values: &[f64]) -> Vec<StartupRecord> {
        values
            .iter()
            .map(|&p| record("x", Some("CA"), p, RiskBucket::Low, false))
            .collect()
    }

    #[test]
    fn histogram_has_fixed_bins_spanning_observed_range() {
        let owned = rows_with_probabilities(&[0.1, 0.3, 0.5, 0.9]);
        let rows: Vec<&StartupRecord> = owned.iter().collect();
        let bins = probability_histogram(&rows, HISTOGRAM_BINS);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins.first().map(|bin| bin.start), Some(0.1));
        assert_eq!(bins.last().map(|bin| bin.end), Some(0.9));
        assert_eq!(bins.iter().map(|bin| bin.count).sum::<usize>(), 4);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[HISTOGRAM_BINS - 1].count, 1);
    }

    #[test]
    fn every_value_lands_in_the_bin_that_covers_it() {
        for step in 0..=1000 {
            let p = step as f64 / 1000.0;
            let owned = rows_with_probabilities(&[0.0, 1.0, p]);
            let rows: Vec<&StartupRecord> = owned.iter().collect();
            let bins = probability_histogram(&rows, HISTOGRAM_BINS);
            let last = bins.len() - 1;
            let holder = bins
                .iter()
                .enumerate()
                .position(|(idx, bin)| {
                    let baseline = usize::from(idx == 0) + usize::from(idx == last);
                    bin.count > baseline
                })
                .unwrap();
            let bin = bins[holder];
            let inside = bin.start <= p && (p < bin.end || (holder == last && p <= bin.end));
            assert!(inside, "p={p} counted in [{}, {})", bin.start, bin.end);
        }
    }

    #[test]
    fn histogram_collapses_degenerate_range() {
        let owned = rows_with_probabilities(&[0.4, 0.4, 0.4]);
        let rows: Vec<&StartupRecord> = owned.iter().collect();
        let bins = probability_histogram(&rows, HISTOGRAM_BINS);
        assert_eq!(
            bins,
            vec![HistogramBin {
                start: 0.4,
                end: 0.4,
                count: 3
            }]
        );
    }

    #[test]
    fn histogram_of_nothing_is_empty() {
        assert!(probability_histogram(&[], HISTOGRAM_BINS).is_empty());
    }

    #[test]
    fn scatter_uses_log_funding_and_skips_unfunded_rows() {
        let mut owned = rows_with_probabilities(&[0.2, 0.7]);
        owned[0].funding_total_usd = 10_000.0;
        owned[1].funding_total_usd = 0.0;
        let rows: Vec<&StartupRecord> = owned.iter().collect();
        let series = funding_scatter(&rows);
        assert_eq!(series.points.len(), 1);
        assert_eq!(series.omitted, 1);
        assert!((series.points[0].log_funding - 4.0).abs() < 1e-12);
        let log = series.points[0].log_funding;
        assert_eq!(series.log_funding_range, Some((log, log)));
    }

    #[test]
    fn scatter_tooltip_lists_identity_and_risk() {
        let dataset = scenario_dataset();
        let rows: Vec<&StartupRecord> = dataset.records().iter().collect();
        let series = funding_scatter(&rows);
        let lines = series.points[0].tooltip_lines();
        assert_eq!(lines[0], "Name: A");
        assert_eq!(lines[1], "State: CA");
        assert_eq!(lines[2], "Total funding (USD): 1,000,000");
        assert_eq!(lines[3], "Predicted failure probability (RF): 80.0%");
        assert_eq!(lines[4], "Risk bucket (RF): High");
    }
}
