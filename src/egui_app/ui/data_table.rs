use super::{UiAction, helpers, style};
use crate::dashboard::{TableColumn, TableSort};
use crate::dataset::StartupRecord;
use eframe::egui::{self, Align2, FontId, RichText, Ui};

const ROW_HEIGHT: f32 = 20.0;
const TABLE_HEIGHT: f32 = 360.0;
const MIN_COLUMN_WIDTH: f32 = 110.0;

fn column_width(ui: &Ui, columns: usize) -> f32 {
    (ui.available_width() / columns.max(1) as f32).max(MIN_COLUMN_WIDTH)
}

fn header_text(column: TableColumn, header: &str, sort: TableSort) -> String {
    if column != sort.column {
        return header.to_string();
    }
    let arrow = if sort.descending { "v" } else { "^" };
    format!("{header} {arrow}")
}

pub(super) fn render_table(
    ui: &mut Ui,
    columns: &[(TableColumn, &str)],
    rows: &[&StartupRecord],
    sort: TableSort,
    actions: &mut Vec<UiAction>,
) {
    let palette = style::palette();
    let width = column_width(ui, columns.len());
    ui.label(
        RichText::new(format!("{} rows", rows.len()))
            .color(palette.text_muted)
            .size(11.0),
    );
    egui::ScrollArea::horizontal()
        .id_salt("startup_table_hscroll")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for &(column, header) in columns {
                    let label = header_text(column, header, sort);
                    let button = egui::Button::new(RichText::new(label).strong())
                        .min_size(egui::vec2(width, ROW_HEIGHT));
                    if ui.add(button).clicked() {
                        actions.push(UiAction::SortBy(column));
                    }
                }
            });
            egui::ScrollArea::vertical()
                .id_salt("startup_table_rows")
                .max_height(TABLE_HEIGHT)
                .auto_shrink([false, true])
                .show_rows(ui, ROW_HEIGHT, rows.len(), |ui, row_range| {
                    for row in row_range {
                        if let Some(record) = rows.get(row) {
                            render_row(ui, columns, record, row, width);
                        }
                    }
                });
        });
}

fn render_row(
    ui: &mut Ui,
    columns: &[(TableColumn, &str)],
    record: &StartupRecord,
    row: usize,
    width: f32,
) {
    let palette = style::palette();
    let total = egui::vec2(width * columns.len() as f32, ROW_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(total, egui::Sense::hover());
    let fill = if response.hovered() {
        style::row_hover_fill()
    } else if row % 2 == 0 {
        palette.bg_secondary
    } else {
        palette.bg_primary
    };
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, fill);
    for (idx, &(column, _)) in columns.iter().enumerate() {
        let color = match column {
            TableColumn::Bucket => style::bucket_color(record.risk_bucket_rf),
            _ => palette.text_primary,
        };
        let text = helpers::clamp_label_for_width(&column.cell(record), width - 8.0);
        painter.text(
            egui::pos2(rect.min.x + idx as f32 * width + 4.0, rect.center().y),
            Align2::LEFT_CENTER,
            text,
            FontId::proportional(12.0),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_column_header_shows_direction() {
        let sort = TableSort::default();
        let probability = "pred_failure_prob_rf";
        assert_eq!(
            header_text(TableColumn::Probability, probability, sort),
            "pred_failure_prob_rf v"
        );
        assert_eq!(
            header_text(
                TableColumn::Probability,
                probability,
                sort.toggled(TableColumn::Probability)
            ),
            "pred_failure_prob_rf ^"
        );
        assert_eq!(header_text(TableColumn::Extra(0), "category_code", sort), "category_code");
    }
}
