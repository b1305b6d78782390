//! Top toolbar: server address, refresh, and layout override.

use frigate_review::core::device::DeviceOverride;

use crate::app::ReviewApp;
use crate::ui::theme;

impl ReviewApp {
    /// Render the top toolbar within the given `Ui` region.
    pub fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            // ── Server address ──────────────────────────────────────
            ui.label(egui::RichText::new("Server").color(theme::TEXT_DIM));
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.server_input)
                    .desired_width(240.0)
                    .hint_text("http://frigate.local:5000"),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui
                .button("\u{1F50C} Connect")
                .on_hover_text("Load reviews from this server")
                .clicked()
                || submitted
            {
                self.connect();
            }

            ui.separator();

            // ── Refresh ─────────────────────────────────────────────
            if self.cache.in_flight_count() > 0 {
                ui.spinner();
            }
            if ui
                .button("\u{1F504} Refresh")
                .on_hover_text("Reload reviews and configuration (F5)")
                .clicked()
            {
                self.refresh();
            }

            ui.separator();

            // ── Layout override ─────────────────────────────────────
            egui::ComboBox::from_id_salt("device_override")
                .selected_text(format!("\u{1F5B5} {}", self.device_override.label()))
                .show_ui(ui, |ui| {
                    for choice in DeviceOverride::ALL {
                        ui.selectable_value(&mut self.device_override, choice, choice.label());
                    }
                })
                .response
                .on_hover_text("Side sheet (desktop) or bottom drawer (mobile) layout");
        });
    }
}
