use super::style;
use crate::dashboard::{HistogramBin, ScatterSeries, format};
use crate::dataset::RiskBucket;
use eframe::egui::{self, Align2, FontId, RichText, StrokeKind, Ui};

const HISTOGRAM_HEIGHT: f32 = 220.0;
const SCATTER_HEIGHT: f32 = 320.0;
const AXIS_MARGIN: egui::Vec2 = egui::vec2(48.0, 28.0);
const POINT_RADIUS: f32 = 3.5;
const HOVER_RADIUS: f32 = 8.0;

/// Linear map from `value` in `domain` onto `[lo, hi]`; a zero-width domain lands in the middle.
pub(crate) fn scale(value: f64, domain: (f64, f64), lo: f32, hi: f32) -> f32 {
    let span = domain.1 - domain.0;
    if span.abs() < f64::EPSILON {
        return (lo + hi) * 0.5;
    }
    let t = ((value - domain.0) / span) as f32;
    lo + t * (hi - lo)
}

/// Whole powers of ten inside a log10 range. Ranges narrower than a decade
/// fall back to their endpoints.
pub(crate) fn decade_ticks(range: (f64, f64)) -> Vec<f64> {
    let (lo, hi) = range;
    let first = lo.ceil() as i32;
    let last = hi.floor() as i32;
    if first <= last {
        return (first..=last).map(f64::from).collect();
    }
    if hi > lo { vec![lo, hi] } else { vec![lo] }
}

/// Allocates a framed chart area and returns the inner plotting rect.
fn chart_frame(ui: &mut Ui, height: f32) -> (egui::Response, egui::Rect, egui::Painter) {
    let size = egui::vec2(ui.available_width().max(200.0), height);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let outer = response.rect;
    let palette = style::palette();
    painter.rect_filled(outer, 0.0, palette.bg_primary);
    painter.rect_stroke(outer, 0.0, style::card_stroke(), StrokeKind::Inside);
    let plot = egui::Rect::from_min_max(
        egui::pos2(outer.min.x + AXIS_MARGIN.x, outer.min.y + 10.0),
        egui::pos2(outer.max.x - 12.0, outer.max.y - AXIS_MARGIN.y),
    );
    (response, plot, painter)
}

fn axis_label(painter: &egui::Painter, pos: egui::Pos2, anchor: Align2, text: String) {
    painter.text(
        pos,
        anchor,
        text,
        FontId::proportional(11.0),
        style::palette().text_muted,
    );
}

fn draw_axes(painter: &egui::Painter, plot: egui::Rect) {
    let axis = style::axis_stroke();
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_bottom(), plot.left_top()], axis);
}

fn draw_y_ticks(painter: &egui::Painter, plot: egui::Rect, domain: (f64, f64), format: impl Fn(f64) -> String) {
    let grid = style::grid_stroke();
    for step in 0..=4 {
        let value = domain.0 + (domain.1 - domain.0) * step as f64 / 4.0;
        let y = scale(value, domain, plot.max.y, plot.min.y);
        if step > 0 {
            painter.line_segment([egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)], grid);
        }
        axis_label(painter, egui::pos2(plot.min.x - 6.0, y), Align2::RIGHT_CENTER, format(value));
    }
}

/// Bar chart of predicted failure probability counts.
pub(super) fn render_histogram(ui: &mut Ui, bins: &[HistogramBin]) {
    let (response, plot, painter) = chart_frame(ui, HISTOGRAM_HEIGHT);
    let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
        return;
    };
    let x_domain = (first.start, last.end);
    let max_count = bins.iter().map(|bin| bin.count).max().unwrap_or(0).max(1);
    let y_domain = (0.0, max_count as f64);
    draw_y_ticks(&painter, plot, y_domain, |value| format!("{value:.0}"));

    let palette = style::palette();
    let bar_color = palette.accent_ice;
    let pointer = response.hover_pos();
    let mut hovered = None;
    for (idx, bin) in bins.iter().enumerate() {
        let (left, right) = if bins.len() == 1 {
            (plot.min.x + 1.0, plot.max.x - 1.0)
        } else {
            (
                scale(bin.start, x_domain, plot.min.x, plot.max.x) + 1.0,
                scale(bin.end, x_domain, plot.min.x, plot.max.x) - 1.0,
            )
        };
        let top = scale(bin.count as f64, y_domain, plot.max.y, plot.min.y);
        let column = egui::Rect::from_min_max(
            egui::pos2(left, plot.min.y),
            egui::pos2(right.max(left + 1.0), plot.max.y),
        );
        let bar = egui::Rect::from_min_max(egui::pos2(left, top), column.right_bottom());
        let is_hovered = pointer.is_some_and(|pos| column.contains(pos));
        let fill = if is_hovered {
            bar_color
        } else {
            style::with_alpha(bar_color, 180)
        };
        painter.rect_filled(bar, 0.0, fill);
        if is_hovered {
            hovered = Some(idx);
        }
    }
    draw_axes(&painter, plot);
    axis_label(
        &painter,
        plot.left_bottom() + egui::vec2(0.0, 4.0),
        Align2::LEFT_TOP,
        format!("{:.2}", x_domain.0),
    );
    axis_label(
        &painter,
        plot.right_bottom() + egui::vec2(0.0, 4.0),
        Align2::RIGHT_TOP,
        format!("{:.2}", x_domain.1),
    );
    axis_label(
        &painter,
        egui::pos2(plot.center().x, plot.max.y + 4.0),
        Align2::CENTER_TOP,
        "Predicted failure probability (RF)".to_string(),
    );

    if let Some(bin) = hovered.and_then(|idx| bins.get(idx)) {
        response.on_hover_ui_at_pointer(|ui| {
            ui.label(format!("Probability {:.3} - {:.3}", bin.start, bin.end));
            ui.label(format!("Startups: {}", bin.count));
        });
    }
}

/// Scatter of funding (log axis) against predicted probability.
pub(super) fn render_scatter(ui: &mut Ui, series: &ScatterSeries) {
    let palette = style::palette();
    render_legend(ui);
    let (response, plot, painter) = chart_frame(ui, SCATTER_HEIGHT);
    let Some(x_domain) = series.log_funding_range else {
        painter.text(
            plot.center(),
            Align2::CENTER_CENTER,
            "No funded startups to plot",
            FontId::proportional(13.0),
            palette.text_muted,
        );
        return;
    };
    let y_domain = (0.0, 1.0);
    draw_y_ticks(&painter, plot, y_domain, |value| format!("{value:.2}"));
    draw_axes(&painter, plot);

    let pointer = response.hover_pos();
    let mut nearest: Option<(usize, f32)> = None;
    for (idx, point) in series.points.iter().enumerate() {
        let pos = egui::pos2(
            scale(point.log_funding, x_domain, plot.min.x + 6.0, plot.max.x - 6.0),
            scale(point.probability, y_domain, plot.max.y, plot.min.y),
        );
        painter.circle_filled(pos, POINT_RADIUS, style::with_alpha(style::bucket_color(point.bucket), 200));
        if let Some(pointer) = pointer {
            let distance = pointer.distance(pos);
            if distance <= HOVER_RADIUS && nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((idx, distance));
            }
        }
    }

    let grid = style::grid_stroke();
    for tick in decade_ticks(x_domain) {
        let x = scale(tick, x_domain, plot.min.x + 6.0, plot.max.x - 6.0);
        painter.line_segment([egui::pos2(x, plot.min.y), egui::pos2(x, plot.max.y)], grid);
        axis_label(
            &painter,
            egui::pos2(x, plot.max.y + 2.0),
            Align2::CENTER_TOP,
            format::usd(10f64.powf(tick)),
        );
    }
    axis_label(
        &painter,
        egui::pos2(plot.center().x, plot.max.y + 14.0),
        Align2::CENTER_TOP,
        "Total funding (USD, log scale)".to_string(),
    );

    if series.omitted > 0 {
        ui.label(
            RichText::new(format!(
                "{} startup(s) without positive funding are not plotted.",
                series.omitted
            ))
            .color(palette.text_muted)
            .size(11.0),
        );
    }

    if let Some(point) = nearest.and_then(|(idx, _)| series.points.get(idx)) {
        painter.circle_stroke(
            egui::pos2(
                scale(point.log_funding, x_domain, plot.min.x + 6.0, plot.max.x - 6.0),
                scale(point.probability, y_domain, plot.max.y, plot.min.y),
            ),
            POINT_RADIUS + 2.0,
            egui::Stroke::new(1.5, palette.text_primary),
        );
        response.on_hover_ui_at_pointer(|ui| {
            for line in point.tooltip_lines() {
                ui.label(line);
            }
        });
    }
}

fn render_legend(ui: &mut Ui) {
    ui.horizontal(|ui| {
        for bucket in RiskBucket::ALL {
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter().circle_filled(swatch.center(), 4.0, style::bucket_color(bucket));
            ui.label(RichText::new(bucket.label()).size(12.0));
            ui.add_space(8.0);
        }
    });
}
