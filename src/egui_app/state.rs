//! Shared UI state consumed by the egui renderer.

use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Top-level UI model next to the computed dashboard view.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn new(text: impl Into<String>, badge: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            badge_label: badge.into(),
            badge_color: style::status_badge_color(tone),
        }
    }
}
