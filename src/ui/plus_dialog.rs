//! Confirmation window for submitting a snapshot to Frigate+.

use frigate_review::core::media;

use crate::app::ReviewApp;
use crate::ui::theme;

/// What the dialog's submit control offers for the shown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitState {
    Ready,
    /// The shown event is being submitted.
    Submitting,
    /// A submission for a different event has not finished yet.
    Busy,
}

fn submit_state(in_flight: Option<&str>, shown: &str) -> SubmitState {
    match in_flight {
        None => SubmitState::Ready,
        Some(id) if id == shown => SubmitState::Submitting,
        Some(_) => SubmitState::Busy,
    }
}

impl ReviewApp {
    /// Show the submission dialog while the overlay has an upload target.
    pub fn render_plus_dialog(&mut self, ctx: &egui::Context) {
        let Some(event) = self.detail.upload().cloned() else {
            return;
        };

        let mut open = true;
        let mut submit = false;
        let mut cancel = false;
        let state = submit_state(self.plus_in_flight.as_deref(), &event.id);
        let url = media::image_url(&self.host, &event);
        let texture = self.texture_for(ctx, &url);

        egui::Window::new("Submit To Frigate+")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(480.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(
                    "Objects in locations you want to avoid are not false positives. \
                     Submitting them as false positives will confuse the model.",
                );
                ui.add_space(8.0);

                match &texture {
                    Some(tex) => {
                        ui.add(egui::Image::new(tex).max_width(460.0).corner_radius(8.0));
                    }
                    None => {
                        ui.spinner();
                    }
                }

                if let Some(error) = &self.plus_error {
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(format!("Submission failed: {error}"))
                            .color(theme::WARNING),
                    );
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    match state {
                        SubmitState::Submitting => {
                            ui.spinner();
                            ui.label("Submitting\u{2026}");
                        }
                        SubmitState::Busy => {
                            ui.add_enabled(false, egui::Button::new("Submit"))
                                .on_disabled_hover_text("Another submission is still running");
                        }
                        SubmitState::Ready => {
                            if ui.button("Submit").clicked() {
                                submit = true;
                            }
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if submit {
            tracing::info!("Submitting event {} to Frigate+", event.id);
            self.submit_upload();
        }
        if cancel || !open {
            self.close_plus_dialog();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_state_tracks_shown_event() {
        assert_eq!(submit_state(None, "a"), SubmitState::Ready);
        assert_eq!(submit_state(Some("a"), "a"), SubmitState::Submitting);
        assert_eq!(
            submit_state(Some("a"), "b"),
            SubmitState::Busy,
            "Another event's submission must not show as this one's"
        );
    }
}
