//! One event tile: the event image with hover-revealed action chips.

use frigate_review::core::config::FrigateConfig;
use frigate_review::core::event::Event;
use frigate_review::core::event_item::{available_actions, has_scrims, EventItemAction};
use frigate_review::core::media;
use frigate_review::core::query::{QueryKey, QueryStatus};

use crate::app::ReviewApp;
use crate::ui::theme;

const CHIP_SIZE: f32 = 28.0;
const CHIP_GAP: f32 = 6.0;
/// Distance of the chip row from the tile's top and right edges.
const CHIP_INSET: f32 = 4.0;
const PLACEHOLDER_HEIGHT: f32 = 180.0;

impl ReviewApp {
    /// Render the tile for `event` and return the action of a clicked chip.
    pub fn render_event_item(
        &mut self,
        ui: &mut egui::Ui,
        event: &Event,
        config: Option<&FrigateConfig>,
    ) -> Option<EventItemAction> {
        let url = media::image_url(&self.host, event);
        let texture = self.texture_for(ui.ctx(), &url);

        let width = ui.available_width();
        let height = texture.as_ref().map_or(PLACEHOLDER_HEIGHT, |tex| {
            let [w, h] = tex.size();
            if w == 0 {
                PLACEHOLDER_HEIGHT
            } else if event.has_snapshot {
                width * h as f32 / w as f32
            } else {
                // Thumbnails are small; draw them at native size, centred.
                h as f32
            }
        });
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

        // ── Image ───────────────────────────────────────────────────
        match &texture {
            Some(tex) => {
                let image_rect = if event.has_snapshot {
                    rect
                } else {
                    let size = tex.size_vec2().min(rect.size());
                    egui::Rect::from_center_size(rect.center(), size)
                };
                egui::Image::new(tex)
                    .corner_radius(8.0)
                    .paint_at(ui, image_rect);
            }
            None => {
                ui.painter().rect_filled(rect, 8.0, theme::BG_TABLE_ROW_EVEN);
                if self.cache.status(&QueryKey::image(url.as_str())) == QueryStatus::Failed {
                    ui.put(
                        rect,
                        egui::Label::new(
                            egui::RichText::new("Image unavailable").color(theme::TEXT_SECONDARY),
                        ),
                    );
                } else {
                    ui.put(rect, egui::Spinner::new());
                }
            }
        }

        if has_scrims(event) {
            let band = rect.height() / 4.0;
            let top = egui::Rect::from_min_max(rect.min, egui::pos2(rect.max.x, rect.min.y + band));
            let bottom =
                egui::Rect::from_min_max(egui::pos2(rect.min.x, rect.max.y - band), rect.max);
            theme::paint_vertical_gradient(ui.painter(), top, theme::SCRIM, egui::Color32::TRANSPARENT);
            theme::paint_vertical_gradient(ui.painter(), bottom, egui::Color32::TRANSPARENT, theme::SCRIM);
        }

        // ── Hover ───────────────────────────────────────────────────
        let inside = ui.rect_contains_pointer(rect);
        let state = self.detail.item_state(&event.id, self.profile);
        state.track_pointer(inside);
        if !state.actions_visible() {
            return None;
        }

        // ── Chips ───────────────────────────────────────────────────
        let mut clicked = None;
        let chips = available_actions(event, config);
        for (slot, chip) in chips.into_iter().rev().enumerate() {
            let chip_rect = chip_rect(rect, slot);
            let button = egui::Button::new(egui::RichText::new(chip.icon()).color(egui::Color32::WHITE))
                .fill(theme::CHIP_BG)
                .corner_radius(6.0);
            if ui.put(chip_rect, button).on_hover_text(chip.tooltip()).clicked() {
                tracing::debug!("{:?} on event {}", chip, event.id);
                clicked = Some(chip.activate(&self.host, event));
            }
        }
        clicked
    }
}

/// Rect of the chip in `slot`, counted from the right, in the row along
/// the tile's top edge (over the top scrim).
fn chip_rect(tile: egui::Rect, slot: usize) -> egui::Rect {
    let right = tile.max.x - CHIP_INSET - slot as f32 * (CHIP_SIZE + CHIP_GAP);
    egui::Rect::from_min_size(
        egui::pos2(right - CHIP_SIZE, tile.min.y + CHIP_INSET),
        egui::vec2(CHIP_SIZE, CHIP_SIZE),
    )
}
