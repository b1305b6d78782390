//! Top-level application state.
//!
//! `ReviewApp` owns the query cache, the review overlay state, and the
//! channels used by background downloads and Frigate+ submissions.
//! Rendering is delegated to panel sub-modules in `ui/`.

use std::collections::HashMap;
use std::sync::Arc;

use crossbeam_channel::Receiver;

use frigate_review::core::api::{make_frigate_client, ApiHost, FrigateApi};
use frigate_review::core::device::{DeviceOverride, DeviceProfile};
use frigate_review::core::query::{QueryCache, QueryKey};
use frigate_review::core::review_dialog::ReviewDetailState;
use frigate_review::util::constants;
use frigate_review::util::error::Result;

// ── Enums ───────────────────────────────────────────────────────────────

/// Which column the review table is currently sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Time,
    Camera,
    Severity,
}

/// Result of a Frigate+ submission, sent from the worker thread.
#[derive(Debug)]
pub struct PlusOutcome {
    pub event_id: String,
    pub result: std::result::Result<Option<String>, String>,
}

// ── Pre-init state ──────────────────────────────────────────────────────

/// Work done before the window opens: resolving the server address and
/// building the HTTP client.
pub struct PreInitState {
    pub host: ApiHost,
    pub api: Arc<dyn FrigateApi>,
}

impl PreInitState {
    /// Resolve the initial server from `FRIGATE_URL` (falling back to the
    /// built-in default) and build its client.
    pub fn build() -> Result<Self> {
        let from_env = std::env::var(constants::API_URL_ENV_VAR).ok();
        let host = match from_env.as_deref().map(ApiHost::parse) {
            Some(Ok(host)) => host,
            Some(Err(e)) => {
                tracing::warn!("Ignoring {}: {}", constants::API_URL_ENV_VAR, e);
                ApiHost::parse(constants::DEFAULT_API_BASE_URL)?
            }
            None => ApiHost::parse(constants::DEFAULT_API_BASE_URL)?,
        };
        let api = make_frigate_client(host.clone())?;
        Ok(Self { host, api })
    }
}

// ── App state ───────────────────────────────────────────────────────────

/// Central application state for FrigateReview.
pub struct ReviewApp {
    // ── Server ──────────────────────────────────────────────────
    /// Text in the toolbar's server field.
    pub server_input: String,
    /// Server the cache currently talks to.
    pub host: ApiHost,

    // ── Data ────────────────────────────────────────────────────
    /// Shared query cache for every remote read.
    pub cache: QueryCache,
    /// Uploaded textures keyed by image URL.
    pub textures: HashMap<String, egui::TextureHandle>,

    // ── Review list ─────────────────────────────────────────────
    pub sort_column: SortColumn,
    /// `true` = ascending, `false` = descending.
    pub sort_ascending: bool,

    // ── Overlay ─────────────────────────────────────────────────
    /// Review detail overlay state.
    pub detail: ReviewDetailState,
    /// Error reported by the last failed Frigate+ submission.
    pub plus_error: Option<String>,
    /// Receiver for the in-flight Frigate+ submission, if any.
    pub plus_rx: Option<Receiver<PlusOutcome>>,
    /// Event id of the in-flight Frigate+ submission.
    pub plus_in_flight: Option<String>,

    // ── Device ──────────────────────────────────────────────────
    /// User's form-factor preference (persisted).
    pub device_override: DeviceOverride,
    /// Profile resolved for the current frame.
    pub profile: DeviceProfile,
    /// Touch input has been observed this session.
    pub touch_seen: bool,

    // ── Downloads ───────────────────────────────────────────────
    /// Receiver for download completion messages from background threads.
    pub download_rx: Option<Receiver<String>>,

    // ── Status ──────────────────────────────────────────────────
    /// Transient status message (shown briefly).
    pub status_message: Option<(String, std::time::Instant)>,
}

// ── Construction ────────────────────────────────────────────────────────

impl ReviewApp {
    /// Build the app from pre-initialised state and restore persisted
    /// preferences.
    pub fn from_pre_init(cc: &eframe::CreationContext<'_>, pre: PreInitState) -> Self {
        crate::ui::theme::apply_theme(&cc.egui_ctx);

        let mut app = Self {
            server_input: pre.host.as_str().to_owned(),
            host: pre.host,
            cache: QueryCache::new(pre.api),
            textures: HashMap::new(),

            sort_column: SortColumn::Time,
            sort_ascending: false, // newest first

            detail: ReviewDetailState::new(),
            plus_error: None,
            plus_rx: None,
            plus_in_flight: None,

            device_override: DeviceOverride::Auto,
            profile: DeviceProfile::DESKTOP,
            touch_seen: false,

            download_rx: None,

            status_message: None,
        };

        // ── Restore persisted preferences ──────────────────────────
        if let Some(storage) = cc.storage {
            if let Some(pref) = eframe::get_value::<DeviceOverride>(storage, "device_override") {
                app.device_override = pref;
            }
            if std::env::var(constants::API_URL_ENV_VAR).is_err() {
                if let Some(url) = eframe::get_value::<String>(storage, "server_url") {
                    app.server_input = url;
                    app.connect();
                }
            }
        }

        app
    }

    /// Key of the review list query.
    pub fn reviews_key() -> QueryKey {
        QueryKey::Reviews {
            limit: constants::REVIEW_LIST_LIMIT,
        }
    }

    /// Switch to the server typed into the toolbar.
    ///
    /// Closes the overlay and drops all cached data and textures, since
    /// they belong to the previous server.
    pub fn connect(&mut self) {
        let host = match ApiHost::parse(&self.server_input) {
            Ok(host) => host,
            Err(e) => {
                self.set_status(e.to_string());
                return;
            }
        };
        if host == self.host {
            return;
        }
        match make_frigate_client(host.clone()) {
            Ok(api) => {
                self.cache.set_api(api);
                self.detail.close();
                self.textures.clear();
                self.plus_rx = None;
                self.plus_in_flight = None;
                self.plus_error = None;
                self.set_status(format!("Connected to {}", host.as_str()));
                self.server_input = host.as_str().to_owned();
                self.host = host;
            }
            Err(e) => {
                tracing::error!("Failed to build client for {}: {}", host.as_str(), e);
                self.set_status(e.to_string());
            }
        }
    }

    /// Show a transient message in the status bar.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), std::time::Instant::now()));
    }
}
