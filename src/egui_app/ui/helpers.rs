use super::style;
use eframe::egui::{self, Frame, Margin, RichText, Ui};

pub(super) fn section_heading(ui: &mut Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(text).size(18.0).strong());
    ui.add_space(4.0);
}

/// Titled value box used for the KPI row and the detail headline.
pub(super) fn metric_card(ui: &mut Ui, title: &str, value: &str, accent: Option<egui::Color32>) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_tertiary)
        .stroke(style::card_stroke())
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).color(palette.text_muted).size(12.0));
            ui.label(
                RichText::new(value)
                    .size(24.0)
                    .color(accent.unwrap_or(palette.text_primary)),
            );
        });
}

pub(super) fn clamp_label_for_width(text: &str, available_width: f32) -> String {
    // Rough character-based truncation to avoid layout thrash.
    let approx_char_width = 7.5;
    let max_chars = (available_width.max(1.0) / approx_char_width)
        .floor()
        .max(4.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_are_untouched() {
        assert_eq!(clamp_label_for_width("Acme", 200.0), "Acme");
    }

    #[test]
    fn long_labels_get_ellipsis() {
        let clipped = clamp_label_for_width("Extremely Long Startup Name Incorporated", 75.0);
        assert_eq!(clipped, "Extreme...");
    }
}
