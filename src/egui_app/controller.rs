//! Bridges widget events to the pure dashboard recomputation.

use crate::dashboard::{
    self, DashboardQuery, DashboardView, RegionFilter, RiskFilter, TableColumn, TableSort,
    filter,
};
use crate::dataset::Dataset;
use crate::egui_app::state::{StatusBarState, UiState};
use crate::egui_app::ui::style::StatusTone;

/// Holds the current widget values and the view computed from them.
pub struct DashboardController {
    pub ui: UiState,
    dataset: &'static Dataset,
    region_options: Option<Vec<RegionFilter>>,
    query: DashboardQuery,
    view: DashboardView<'static>,
}

impl DashboardController {
    /// Start with every filter at `All` and the default table sort.
    pub fn new(dataset: &'static Dataset) -> Self {
        let mut query = DashboardQuery::default();
        let view = dashboard::render(dataset, &query);
        sync_selection(&mut query, &view);
        Self {
            ui: UiState {
                status: status_for(dataset, &view),
            },
            dataset,
            region_options: filter::region_options(dataset),
            query,
            view,
        }
    }

    pub fn query(&self) -> &DashboardQuery {
        &self.query
    }

    /// View for the current query; rebuilt on every change.
    pub fn view(&self) -> &DashboardView<'static> {
        &self.view
    }

    /// Region selector entries; `None` when the data has no `state_code` column.
    pub fn region_options(&self) -> Option<&[RegionFilter]> {
        self.region_options.as_deref()
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        if self.query.filters.region == region {
            return;
        }
        tracing::debug!(region = region.label(), "Region filter changed");
        self.query.filters.region = region;
        self.recompute();
    }

    pub fn set_risk(&mut self, risk: RiskFilter) {
        if self.query.filters.risk == risk {
            return;
        }
        tracing::debug!(risk = risk.label(), "Risk filter changed");
        self.query.filters.risk = risk;
        self.recompute();
    }

    pub fn select_startup(&mut self, name: String) {
        if self.query.startup.as_deref() == Some(name.as_str()) {
            return;
        }
        self.query.startup = Some(name);
        self.recompute();
    }

    /// Header click on the data table.
    pub fn toggle_sort(&mut self, column: TableColumn) {
        self.query.sort = self.query.sort.toggled(column);
        self.recompute();
    }

    pub fn table_sort(&self) -> TableSort {
        self.query.sort
    }

    fn recompute(&mut self) {
        self.view = dashboard::render(self.dataset, &self.query);
        sync_selection(&mut self.query, &self.view);
        if self.view.portfolio().is_none() {
            tracing::info!(
                region = self.query.filters.region.label(),
                risk = self.query.filters.risk.label(),
                "Filters matched no startups"
            );
        }
        self.ui.status = status_for(self.dataset, &self.view);
    }
}

/// Keep the requested startup in step with the one the detail panel shows.
fn sync_selection(query: &mut DashboardQuery, view: &DashboardView<'_>) {
    if let Some(portfolio) = view.portfolio() {
        query.startup = portfolio.detail.as_ref().map(|detail| detail.name.clone());
    }
}

fn status_for(dataset: &Dataset, view: &DashboardView<'_>) -> StatusBarState {
    let total = dataset.len();
    let source = dataset.source().display();
    match view {
        DashboardView::Empty { .. } => StatusBarState::new(
            format!("0 of {total} startups match | {source}"),
            "No matches",
            StatusTone::Warning,
        ),
        DashboardView::Populated(portfolio) => StatusBarState::new(
            format!("{} of {total} startups shown | {source}", portfolio.kpis.total),
            "Ready",
            StatusTone::Info,
        ),
    }
}
