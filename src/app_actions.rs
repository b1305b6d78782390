//! Extended actions for [`ReviewApp`]: image downloads, Frigate+
//! submissions, and keyboard shortcuts.
//!
//! These are `impl` blocks on the app struct, split out from `app.rs`
//! to keep file sizes manageable.

use std::sync::Arc;

use frigate_review::core::media;
use frigate_review::core::review_dialog::DownloadRequest;
use frigate_review::util::constants::NEW_UPLOAD_SENTINEL;

use crate::app::{PlusOutcome, ReviewApp};

// ── Downloads ───────────────────────────────────────────────────────────

impl ReviewApp {
    /// Save an event image via a native save dialog.
    ///
    /// Runs on a background thread and sends a completion message back
    /// via `download_rx` so the UI can display feedback.
    pub fn start_download(&mut self, request: DownloadRequest) {
        if self.download_rx.is_some() {
            self.set_status("Download already in progress");
            return;
        }

        let (tx, rx) = crossbeam_channel::bounded::<String>(1);
        self.download_rx = Some(rx);
        let api = Arc::clone(self.cache.api());

        std::thread::spawn(move || {
            let Some(path) = rfd::FileDialog::new()
                .add_filter("JPEG", &["jpg", "jpeg"])
                .set_file_name(&request.file_name)
                .save_file()
            else {
                return;
            };
            let outcome = api
                .fetch_bytes(&request.url)
                .and_then(|bytes| media::save_download(&bytes, &path));
            match outcome {
                Ok(()) => {
                    let _ = tx.send(format!("Saved {}", path.display()));
                }
                Err(e) => {
                    tracing::error!("Download of {} failed: {}", request.url, e);
                    let _ = tx.send(format!("Download failed: {e}"));
                }
            }
        });
    }

    /// Process download completion messages from background threads.
    pub fn process_download_messages(&mut self) {
        let Some(rx) = &self.download_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(msg) => {
                self.download_rx = None;
                self.set_status(msg);
            }
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                // Sender dropped without sending (user cancelled the save dialog).
                self.download_rx = None;
            }
            Err(crossbeam_channel::TryRecvError::Empty) => {}
        }
    }
}

// ── Frigate+ submission ─────────────────────────────────────────────────

impl ReviewApp {
    /// Submit the overlay's upload target to Frigate+ on a background thread.
    pub fn submit_upload(&mut self) {
        if self.plus_rx.is_some() {
            tracing::debug!("submit_upload: submission already in flight");
            return;
        }
        let Some(event) = self.detail.upload() else {
            return;
        };
        let event_id = event.id.clone();
        let api = Arc::clone(self.cache.api());
        let (tx, rx) = crossbeam_channel::bounded::<PlusOutcome>(1);
        self.plus_rx = Some(rx);
        self.plus_in_flight = Some(event_id.clone());
        self.plus_error = None;

        let spawned = std::thread::Builder::new()
            .name("plus-submit".into())
            .spawn(move || {
                let result = api.submit_to_plus(&event_id).map_err(|e| e.to_string());
                let _ = tx.send(PlusOutcome { event_id, result });
            });
        if let Err(e) = spawned {
            tracing::error!("Failed to spawn Frigate+ submission: {}", e);
            self.plus_rx = None;
            self.plus_in_flight = None;
            self.plus_error = Some(e.to_string());
        }
    }

    /// Apply a finished Frigate+ submission.
    ///
    /// On success the event is marked as uploaded in every cached list. The
    /// dialog closes if it still shows the submitted event; a submission
    /// that finishes after the dialog was dismissed still patches the cache.
    pub fn process_plus_messages(&mut self) {
        let Some(rx) = &self.plus_rx else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(crossbeam_channel::TryRecvError::Empty) => return,
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                self.plus_rx = None;
                self.plus_in_flight = None;
                return;
            }
        };
        self.plus_rx = None;
        self.plus_in_flight = None;

        let still_shown = self
            .detail
            .upload()
            .is_some_and(|e| e.id == outcome.event_id);
        match outcome.result {
            Ok(_) => {
                if still_shown {
                    self.detail.on_event_uploaded(&mut self.cache);
                    self.detail.clear_upload();
                } else {
                    self.cache.mutate_event(&outcome.event_id, |event| {
                        event.plus_id = Some(NEW_UPLOAD_SENTINEL.to_owned());
                    });
                }
                self.set_status("Submitted to Frigate+");
            }
            Err(e) if still_shown => {
                self.plus_error = Some(e);
            }
            Err(e) => {
                self.set_status(format!("Frigate+ submission failed: {e}"));
            }
        }
    }

    /// Close the submission dialog.
    pub fn close_plus_dialog(&mut self) {
        self.detail.clear_upload();
        self.plus_error = None;
    }
}

// ── Keyboard shortcuts ──────────────────────────────────────────────────

impl ReviewApp {
    /// Handle global keyboard shortcuts.
    ///
    /// - **F5 / Ctrl+R**: Refresh
    /// - **Escape**: Close the submission dialog, then the review overlay
    pub fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let (refresh, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F5) || (i.modifiers.ctrl && i.key_pressed(egui::Key::R)),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if refresh {
            self.refresh();
        }

        if escape {
            if self.detail.upload().is_some() {
                self.close_plus_dialog();
            } else if self.detail.is_open() {
                self.detail.close();
            }
        }
    }
}
