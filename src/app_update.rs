//! Frame-by-frame update loop.
//!
//! Contains the [`eframe::App`] implementation for `ReviewApp`: draining
//! background results, resolving the device profile, and laying out the
//! panels.

use frigate_review::core::device::{DeviceProfile, OverlayKind};
use frigate_review::core::query::{QueryKey, QueryOptions};
use frigate_review::util::constants;

use crate::app::ReviewApp;

// ── Core logic ──────────────────────────────────────────────────────────

impl ReviewApp {
    /// Resolve the device profile for this frame from the window size,
    /// touch input and the user's override.
    pub(crate) fn update_device_profile(&mut self, ctx: &egui::Context) {
        let (width, touching, focused) =
            ctx.input(|i| (i.screen_rect().width(), i.any_touches(), i.focused));
        if touching && !self.touch_seen {
            tracing::debug!("Touch input detected");
            self.touch_seen = true;
        }
        self.profile = DeviceProfile::resolve(self.device_override, width, self.touch_seen);
        self.cache.set_focused(focused);
    }

    /// Issue the reads every frame needs. Repeated requests are free: the
    /// cache deduplicates them.
    pub(crate) fn request_frame_data(&mut self) {
        self.cache.request(
            &QueryKey::Config,
            QueryOptions::default().without_focus_revalidation(),
        );
        self.cache
            .request(&Self::reviews_key(), QueryOptions::default());
        self.detail.request_data(&mut self.cache);
    }

    /// Refetch the review list, config and the open review's events.
    pub fn refresh(&mut self) {
        tracing::info!("Refreshing from {}", self.host.as_str());
        self.cache.invalidate(&QueryKey::Config);
        self.cache.invalidate(&Self::reviews_key());
        let (key, options) = self.detail.events_query();
        if options.enabled {
            self.cache.invalidate(&key);
        }
    }

    /// Clear the transient status message once it has been shown long enough.
    fn expire_status_message(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed() > std::time::Duration::from_secs(constants::STATUS_MESSAGE_SECS) {
                self.status_message = None;
            }
        }
    }
}

// ── eframe::App implementation ──────────────────────────────────────────

impl eframe::App for ReviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Device profile and focus tracking
        self.update_device_profile(ctx);

        // 2. Apply finished fetches, free textures of evicted images
        self.cache.poll();
        self.release_evicted_textures();

        // 3. Background downloads and submissions
        self.process_download_messages();
        self.process_plus_messages();
        self.expire_status_message();

        // 4. Make sure the data this frame shows is requested
        self.request_frame_data();

        // 5. Keep repainting while anything is in flight (to poll results)
        if self.cache.in_flight_count() > 0 || self.plus_rx.is_some() || self.download_rx.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // 6. Keyboard shortcuts
        self.handle_keyboard_shortcuts(ctx);

        // ── Top toolbar ─────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .exact_height(38.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.render_toolbar(ui);
            });

        // ── Bottom status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(28.0)
            .show(ctx, |ui| {
                self.render_status_bar(ui);
            });

        // ── Review overlay ──────────────────────────────────────────
        if self.detail.is_open() {
            match self.detail.overlay_kind(self.profile) {
                OverlayKind::Sheet => {
                    egui::SidePanel::right("review_detail_sheet")
                        .resizable(false)
                        .exact_width(self.detail.sheet_width())
                        .show(ctx, |ui| {
                            self.render_review_overlay(ui);
                        });
                }
                OverlayKind::Drawer => {
                    let max_height = self.detail.drawer_max_height(ctx.screen_rect().height());
                    egui::TopBottomPanel::bottom("review_detail_drawer")
                        .resizable(false)
                        .default_height(max_height / 2.0)
                        .max_height(max_height)
                        .show(ctx, |ui| {
                            self.render_review_overlay(ui);
                        });
                }
            }
        }

        // ── Central review list ─────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_review_list(ui);
        });

        // ── Floating dialogs ────────────────────────────────────────
        self.render_plus_dialog(ctx);
    }

    /// Match the GPU clear colour to the themed background.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        crate::ui::theme::BG_DARK.to_normalized_gamma_f32()
    }

    /// Persist user preferences to eframe storage on shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, "server_url", &self.host.as_str().to_owned());
        eframe::set_value(storage, "device_override", &self.device_override);
    }
}
