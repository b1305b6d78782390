//! Review detail overlay: the side sheet on desktop, the bottom drawer on
//! mobile. Both share the same content, rendered here.

use frigate_review::core::event::Event;
use frigate_review::core::event_item::EventItemAction;
use frigate_review::core::query::QueryStatus;
use frigate_review::util::text::{capitalize_words, display_name, humanize, icon_for_label};

use crate::app::ReviewApp;
use crate::ui::theme;

const MISMATCH_NOTICE: &str = "Some objects that were detected are not included in this list \
because the object does not have a snapshot";

impl ReviewApp {
    /// Render the overlay contents for the open review.
    pub fn render_review_overlay(&mut self, ui: &mut egui::Ui) {
        if !self.detail.is_open() {
            return;
        }

        self.render_overlay_header(ui);
        ui.separator();

        if self.detail.details_visible() {
            self.render_object_lifecycle(ui);
        } else if self.detail.overview_visible() {
            egui::ScrollArea::vertical()
                .id_salt("review_overview_scroll")
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    self.render_overview(ui);
                });
        }
    }

    fn render_overlay_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let title = if self.detail.details_visible() {
                "Object Lifecycle"
            } else {
                "Review Item Details"
            };
            ui.heading(title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button("\u{2715}")
                    .on_hover_text("Close (Esc)")
                    .clicked()
                {
                    self.detail.close();
                }
            });
        });
    }

    /// Overview pane: metadata grid, mismatch notice, then one tile per event.
    fn render_overview(&mut self, ui: &mut egui::Ui) {
        let Some(review) = self.detail.review().cloned() else {
            return;
        };
        let config = self.cache.config().cloned();
        let events: Option<Vec<Event>> = self.detail.events(&self.cache).map(<[Event]>::to_vec);

        // ── Camera / timestamp ──────────────────────────────────────
        ui.columns(2, |cols| {
            field_caption(&mut cols[0], "Camera");
            cols[0].label(display_name(&review.camera));

            field_caption(&mut cols[1], "Timestamp");
            let date = self.detail.formatted_date(config.as_ref()).unwrap_or_default();
            cols[1].label(date);
        });
        ui.add_space(8.0);

        // ── Objects / zones ─────────────────────────────────────────
        ui.columns(2, |cols| {
            field_caption(&mut cols[0], "Objects");
            match &events {
                Some(events) => {
                    for event in events {
                        cols[0].label(format!(
                            "{} {} ({}%)",
                            icon_for_label(&event.label),
                            capitalize_words(&humanize(event.display_label())),
                            event.confidence_percent()
                        ));
                    }
                }
                None => {
                    cols[0].spinner();
                }
            }

            if !review.data.zones.is_empty() {
                field_caption(&mut cols[1], "Zones");
                for zone in &review.data.zones {
                    cols[1].label(capitalize_words(&humanize(zone)));
                }
            }
        });

        if self.detail.has_mismatch(events.as_deref()) {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(MISMATCH_NOTICE).color(theme::WARNING).small());
        }

        ui.add_space(12.0);

        // ── Event tiles ─────────────────────────────────────────────
        let Some(events) = events else {
            let (key, _) = self.detail.events_query();
            if self.cache.status(&key) == QueryStatus::Failed {
                let error = self.cache.error(&key).unwrap_or("unknown error").to_owned();
                ui.label(
                    egui::RichText::new(format!("Could not load events: {error}"))
                        .color(theme::WARNING),
                );
            }
            return;
        };

        let mut actions: Vec<EventItemAction> = Vec::new();
        for event in &events {
            if let Some(action) = self.render_event_item(ui, event, config.as_ref()) {
                actions.push(action);
            }
            ui.add_space(8.0);
        }

        for action in actions {
            if let Some(request) = self.detail.apply(action) {
                self.start_download(request);
            }
        }
    }
}

fn field_caption(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).color(theme::TEXT_DIM).small());
}
