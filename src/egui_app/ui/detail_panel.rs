use super::{UiAction, helpers, style};
use crate::dashboard::StartupDetail;
use eframe::egui::{self, RichText, Ui};

pub(super) fn render_detail(
    ui: &mut Ui,
    options: &[String],
    detail: Option<&StartupDetail>,
    actions: &mut Vec<UiAction>,
) {
    let palette = style::palette();
    ui.label("Select a startup");
    let selected = detail.map(|detail| detail.name.as_str()).unwrap_or("");
    egui::ComboBox::from_id_salt("startup_select_combo")
        .width(320.0)
        .selected_text(selected)
        .height(360.0)
        .show_ui(ui, |ui| {
            for name in options {
                let is_selected = name == selected;
                if ui.selectable_label(is_selected, name).clicked() && !is_selected {
                    actions.push(UiAction::SelectStartup(name.clone()));
                }
            }
        });
    ui.add_space(8.0);

    let Some(detail) = detail else {
        ui.label(RichText::new("No named startups in the current selection.").color(palette.text_muted));
        return;
    };

    let outcome_color = if detail.target_failure {
        palette.warning
    } else {
        palette.success
    };
    ui.columns(3, |columns| {
        helpers::metric_card(
            &mut columns[0],
            "Predicted failure probability (RF)",
            &detail.probability_text(),
            None,
        );
        helpers::metric_card(
            &mut columns[1],
            "Actual status",
            detail.actual_label(),
            Some(outcome_color),
        );
        helpers::metric_card(
            &mut columns[2],
            "Risk bucket (RF)",
            detail.bucket.label(),
            Some(style::bucket_color(detail.bucket)),
        );
    });

    ui.add_space(6.0);
    ui.label(RichText::new("Context").strong());
    egui::Grid::new("startup_context_grid")
        .num_columns(6)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for (idx, (label, value)) in detail.context_fields().iter().enumerate() {
                ui.label(RichText::new(*label).color(palette.text_muted));
                ui.label(RichText::new(value).strong());
                if idx % 3 == 2 {
                    ui.end_row();
                }
            }
        });
}
