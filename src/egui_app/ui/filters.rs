use super::{UiAction, style};
use crate::dashboard::{RegionFilter, RiskFilter};
use crate::egui_app::controller::DashboardController;
use eframe::egui::{self, RichText, Ui};

const COMBO_WIDTH: f32 = 180.0;

/// Sidebar with the region and risk-bucket selectors.
pub(super) fn render_filters(ui: &mut Ui, controller: &DashboardController) -> Vec<UiAction> {
    let palette = style::palette();
    let mut actions = Vec::new();
    let filters = &controller.query().filters;

    ui.add_space(8.0);
    ui.label(RichText::new("Filters").size(18.0).strong());
    ui.add_space(8.0);

    ui.label("State / Region");
    match controller.region_options() {
        Some(options) => {
            egui::ComboBox::from_id_salt("region_filter_combo")
                .width(COMBO_WIDTH)
                .selected_text(filters.region.label())
                .show_ui(ui, |ui| {
                    for option in options {
                        let selected = *option == filters.region;
                        if ui.selectable_label(selected, option.label()).clicked() && !selected {
                            actions.push(UiAction::SetRegion(option.clone()));
                        }
                    }
                });
        }
        None => {
            ui.label(
                RichText::new("No state/region column found in data.").color(palette.text_muted),
            );
        }
    }
    ui.add_space(8.0);

    ui.label("Risk bucket (RF)");
    egui::ComboBox::from_id_salt("risk_filter_combo")
        .width(COMBO_WIDTH)
        .selected_text(filters.risk.label())
        .show_ui(ui, |ui| {
            for option in RiskFilter::OPTIONS {
                let selected = option == filters.risk;
                if ui.selectable_label(selected, option.label()).clicked() && !selected {
                    actions.push(UiAction::SetRisk(option));
                }
            }
        });

    let filtered = filters.region != RegionFilter::All || filters.risk != RiskFilter::All;
    ui.add_space(12.0);
    if ui
        .add_enabled(filtered, egui::Button::new("Reset filters"))
        .clicked()
    {
        actions.push(UiAction::SetRegion(RegionFilter::All));
        actions.push(UiAction::SetRisk(RiskFilter::All));
    }
    actions
}
