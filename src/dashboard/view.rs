use crate::dataset::{Dataset, StartupRecord};

use super::charts::{self, HISTOGRAM_BINS, HistogramBin, ScatterSeries};
use super::detail::{self, StartupDetail};
use super::filter::{FilterSelection, apply_filters};
use super::metrics::PortfolioKpis;
use super::table::{TableColumn, TableSort};

/// Warning shown instead of the dashboard body when nothing matches.
pub const EMPTY_NOTICE: &str = "No startups match the current filters. Try relaxing the filters.";

/// Widget values that drive one recomputation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DashboardQuery {
    pub filters: FilterSelection,
    /// Startup picked in the detail selector, if any.
    pub startup: Option<String>,
    pub sort: TableSort,
}

/// Result of one recomputation.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardView<'a> {
    /// The filters matched nothing; only the notice is shown.
    Empty { notice: &'static str },
    Populated(Box<PortfolioView<'a>>),
}

impl<'a> DashboardView<'a> {
    pub fn portfolio(&self) -> Option<&PortfolioView<'a>> {
        match self {
            DashboardView::Populated(view) => Some(view),
            DashboardView::Empty { .. } => None,
        }
    }
}

/// Everything drawn below the filters for a non-empty subset.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioView<'a> {
    pub kpis: PortfolioKpis,
    pub histogram: Vec<HistogramBin>,
    pub scatter: ScatterSeries,
    /// Entries of the startup selector.
    pub startup_options: Vec<String>,
    /// Detail for the selected (or first) startup.
    pub detail: Option<StartupDetail>,
    /// Table columns with their header text, fixed columns first.
    pub table_columns: Vec<(TableColumn, &'a str)>,
    /// Filtered rows in table order.
    pub table: Vec<&'a StartupRecord>,
}

/// Recompute the whole dashboard from the dataset and the current widget values.
pub fn render<'a>(dataset: &'a Dataset, query: &DashboardQuery) -> DashboardView<'a> {
    let mut rows = apply_filters(dataset, &query.filters);
    if rows.is_empty() {
        return DashboardView::Empty {
            notice: EMPTY_NOTICE,
        };
    }

    let kpis = PortfolioKpis::compute(&rows);
    let histogram = charts::probability_histogram(&rows, HISTOGRAM_BINS);
    let scatter = charts::funding_scatter(&rows);
    let startup_options = detail::startup_options(&rows);
    let detail = detail::resolve_selection(&startup_options, query.startup.as_deref())
        .and_then(|name| detail::lookup(&rows, &name));
    query.sort.apply(&mut rows);
    let table_columns = TableColumn::for_dataset(dataset)
        .into_iter()
        .map(|column| (column, column.header(dataset)))
        .collect();

    DashboardView::Populated(Box::new(PortfolioView {
        kpis,
        histogram,
        scatter,
        startup_options,
        detail,
        table_columns,
        table: rows,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::filter::{RegionFilter, RiskFilter};
    use crate::dashboard::test_rows::scenario_dataset;
    use crate::dataset::RiskBucket;

    fn query(region: RegionFilter, risk: RiskFilter) -> DashboardQuery {
        DashboardQuery {
            filters: FilterSelection::new(region, risk),
            ..DashboardQuery::default()
        }
    }

    #[test]
    fn unmatched_region_yields_notice_only() {
        let dataset = scenario_dataset();
        let view = render(&dataset, &query(RegionFilter::State("TX".into()), RiskFilter::All));
        assert_eq!(
            view,
            DashboardView::Empty {
                notice: EMPTY_NOTICE
            }
        );
    }

    #[test]
    fn populated_view_orders_table_by_probability() {
        let dataset = scenario_dataset();
        let view = render(&dataset, &DashboardQuery::default());
        let portfolio = view.portfolio().unwrap();
        let order: Vec<&str> = portfolio
            .table
            .iter()
            .filter_map(|row| row.name.as_deref())
            .collect();
        assert_eq!(order, ["A", "C", "B"]);
        assert_eq!(portfolio.startup_options, ["A", "B", "C"]);
        assert_eq!(portfolio.detail.as_ref().map(|d| d.name.as_str()), Some("A"));
    }

    #[test]
    fn stale_startup_selection_falls_back_to_first_match() {
        let dataset = scenario_dataset();
        let mut request = query(RegionFilter::All, RiskFilter::Bucket(RiskBucket::Medium));
        request.startup = Some("A".into());
        let view = render(&dataset, &request);
        let detail = view.portfolio().and_then(|p| p.detail.clone()).unwrap();
        assert_eq!(detail.name, "C");
        assert_eq!(detail.bucket, RiskBucket::Medium);
    }
}
