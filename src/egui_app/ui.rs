//! egui renderer for the dashboard window.

mod charts;
mod data_table;
mod detail_panel;
mod filters;
mod helpers;
mod kpis;
pub mod style;

use crate::dashboard::{DashboardView, RegionFilter, RiskFilter, TableColumn};
use crate::egui_app::controller::DashboardController;
use crate::dataset::Dataset;
use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

/// Smallest usable window size.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

const TITLE: &str = "AI Startup Failure Prediction Dashboard";
const INTRO: &str = "This dashboard uses a machine learning model (Random Forest) trained on \
historical startup data to estimate the probability of failure (closure) for each startup.";
const PERSONAS: &str = "Personas: VCs, angel investors, accelerators, founders.";
const TARGET: &str = "Target: 1 = Failure (closed), 0 = Success (acquired).";

/// Widget events gathered while drawing and applied once the frame is laid out.
#[derive(Clone, Debug, PartialEq)]
enum UiAction {
    SetRegion(RegionFilter),
    SetRisk(RiskFilter),
    SelectStartup(String),
    SortBy(TableColumn),
}

/// Renders the dashboard from the controller's current view.
pub struct EguiApp {
    controller: DashboardController,
    visuals_set: bool,
    pending: Vec<UiAction>,
}

impl EguiApp {
    pub fn new(dataset: &'static Dataset) -> Self {
        Self {
            controller: DashboardController::new(dataset),
            visuals_set: false,
            pending: Vec::new(),
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::card_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 0.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::card_stroke(),
                        StrokeKind::Inside,
                    );
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.heading(RichText::new(TITLE).strong());
        ui.add_space(4.0);
        ui.label(INTRO);
        ui.label(RichText::new(PERSONAS).color(palette.text_muted));
        ui.label(RichText::new(TARGET).color(palette.text_muted));
        ui.add_space(8.0);
    }

    fn render_body(&mut self, ui: &mut egui::Ui) {
        let view = self.controller.view();
        let portfolio = match view {
            DashboardView::Empty { notice } => {
                let palette = style::palette();
                Frame::new()
                    .fill(style::with_alpha(palette.warning, 40))
                    .stroke(egui::Stroke::new(1.0, palette.warning))
                    .inner_margin(Margin::same(10))
                    .show(ui, |ui| {
                        ui.label(RichText::new(*notice).color(palette.warning));
                    });
                return;
            }
            DashboardView::Populated(portfolio) => portfolio,
        };

        let mut actions = Vec::new();
        kpis::render_kpis(ui, &portfolio.kpis);
        ui.add_space(12.0);
        helpers::section_heading(ui, "Portfolio risk overview");
        ui.label("Risk distribution (predicted failure probability)");
        charts::render_histogram(ui, &portfolio.histogram);
        ui.add_space(10.0);
        ui.label("Funding vs. predicted failure risk");
        charts::render_scatter(ui, &portfolio.scatter);
        ui.separator();
        helpers::section_heading(ui, "Startup-level Risk View");
        detail_panel::render_detail(
            ui,
            &portfolio.startup_options,
            portfolio.detail.as_ref(),
            &mut actions,
        );
        ui.separator();
        helpers::section_heading(ui, "Underlying data (filtered)");
        data_table::render_table(
            ui,
            &portfolio.table_columns,
            &portfolio.table,
            self.controller.table_sort(),
            &mut actions,
        );

        self.pending.extend(actions);
    }

    fn apply_pending(&mut self) {
        for action in self.pending.drain(..) {
            match action {
                UiAction::SetRegion(region) => self.controller.set_region(region),
                UiAction::SetRisk(risk) => self.controller.set_risk(risk),
                UiAction::SelectStartup(name) => self.controller.select_startup(name),
                UiAction::SortBy(column) => self.controller.toggle_sort(column),
            }
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_status(ctx);
        egui::SidePanel::left("filters_panel")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                let actions = filters::render_filters(ui, &self.controller);
                self.pending.extend(actions);
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_header(ui);
                    self.render_body(ui);
                });
        });
        if !self.pending.is_empty() {
            self.apply_pending();
            ctx.request_repaint();
        }
    }
}
