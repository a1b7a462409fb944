use super::{helpers, style};
use crate::dashboard::PortfolioKpis;
use eframe::egui::Ui;

pub(super) fn render_kpis(ui: &mut Ui, kpis: &PortfolioKpis) {
    let cards = kpis.cards();
    let warning = style::palette().warning;
    ui.columns(cards.len(), |columns| {
        for (idx, (column, (title, value))) in columns.iter_mut().zip(cards.iter()).enumerate() {
            // Last card counts High-risk startups.
            let accent = (idx == cards.len() - 1 && kpis.high_risk_count > 0).then_some(warning);
            helpers::metric_card(column, title, value, accent);
        }
    });
}
