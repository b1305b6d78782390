//! Bottom status bar: review count, loading status, and errors.

use frigate_review::util::text::humanize;

use crate::app::ReviewApp;
use crate::ui::theme;

impl ReviewApp {
    /// Render the status bar at the bottom of the window.
    ///
    /// Shows: review count | loading indicator | transient message | last error.
    pub fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            // ── Review count ────────────────────────────────────────
            let count = self
                .cache
                .reviews(&Self::reviews_key())
                .map_or(0, |reviews| reviews.len());
            ui.label(egui::RichText::new(format!("{count} reviews")).color(theme::TEXT_SECONDARY));

            ui.separator();

            // ── Loading status ──────────────────────────────────────
            let in_flight = self.cache.in_flight_count();
            if in_flight > 0 {
                ui.spinner();
                ui.label(
                    egui::RichText::new(format!("Loading\u{2026} ({in_flight} requests)"))
                        .color(theme::TEXT_SECONDARY),
                );
            } else {
                ui.label(egui::RichText::new("Ready").color(theme::ACCENT_DIM));
            }

            // ── Transient message ───────────────────────────────────
            if let Some((msg, _)) = &self.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(theme::TEXT_PRIMARY));
            }

            // ── Last error ──────────────────────────────────────────
            if let Some((key, error)) = self.cache.last_error() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new("!! request failed").color(theme::WARNING))
                        .on_hover_text(format!("{}: {}", humanize(&format!("{key:?}")), error));
                });
            }
        });
    }
}
