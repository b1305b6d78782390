//! Details pane: the lifecycle timeline of the selected event.

use frigate_review::core::config::FrigateConfig;
use frigate_review::core::lifecycle::sorted_entries;
use frigate_review::core::media;
use frigate_review::core::query::{QueryKey, QueryOptions, QueryStatus};
use frigate_review::util::time::format_epoch;

use crate::app::ReviewApp;
use crate::ui::theme;

impl ReviewApp {
    /// Render the lifecycle of the selected event with a way back to the
    /// overview.
    pub fn render_object_lifecycle(&mut self, ui: &mut egui::Ui) {
        if ui.button("\u{2190} Back").clicked() {
            self.detail.show_overview();
            return;
        }

        let Some(event_id) = self.detail.selected_event_id().map(str::to_owned) else {
            return;
        };
        let event = self
            .detail
            .events(&self.cache)
            .and_then(|events| self.detail.selected_event(events))
            .cloned();

        let key = QueryKey::timeline(event_id.as_str());
        self.cache.request(&key, QueryOptions::enabled_if(!event_id.is_empty()));

        egui::ScrollArea::vertical()
            .id_salt("object_lifecycle_scroll")
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if let Some(event) = &event {
                    let url = media::image_url(&self.host, event);
                    if let Some(tex) = self.texture_for(ui.ctx(), &url) {
                        ui.add(
                            egui::Image::new(&tex)
                                .max_width(ui.available_width())
                                .corner_radius(8.0),
                        );
                    }
                    ui.add_space(8.0);
                }

                let pattern =
                    FrigateConfig::time_format_or_default(self.cache.config()).time_of_day_pattern();
                match self.cache.timeline(&key) {
                    Some([]) => {
                        ui.label(
                            egui::RichText::new("No lifecycle recorded for this object")
                                .color(theme::TEXT_SECONDARY),
                        );
                    }
                    Some(entries) => {
                        egui::Grid::new("lifecycle_grid")
                            .num_columns(2)
                            .spacing([16.0, 6.0])
                            .striped(true)
                            .show(ui, |ui| {
                                for entry in sorted_entries(entries) {
                                    ui.label(
                                        egui::RichText::new(format_epoch(entry.timestamp, pattern))
                                            .color(theme::TEXT_SECONDARY)
                                            .monospace(),
                                    );
                                    ui.label(entry.description());
                                    ui.end_row();
                                }
                            });
                    }
                    None if self.cache.status(&key) == QueryStatus::Failed => {
                        let error = self.cache.error(&key).unwrap_or("unknown error");
                        ui.label(
                            egui::RichText::new(format!("Could not load lifecycle: {error}"))
                                .color(theme::WARNING),
                        );
                    }
                    None => {
                        ui.spinner();
                    }
                }
            });
    }
}
