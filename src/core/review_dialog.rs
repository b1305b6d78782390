//! Rendering-independent state of the review detail overlay.
//!
//! [`ReviewDetailState`] owns which review is open, which pane is shown,
//! the selected event, the pending Frigate+ upload target, and per-tile
//! hover state. The UI layer reads it to draw the overlay and feeds user
//! input back through its methods; nothing here touches egui.

use std::collections::HashMap;

use crate::core::config::FrigateConfig;
use crate::core::device::{DeviceProfile, OverlayKind};
use crate::core::event::Event;
use crate::core::event_item::{EventItemAction, EventItemState};
use crate::core::query::{QueryCache, QueryKey, QueryOptions};
use crate::core::review_segment::ReviewSegment;
use crate::util::constants::{
    DRAWER_MAX_HEIGHT_FRACTION, NEW_UPLOAD_SENTINEL, SHEET_WIDTH_DETAILS, SHEET_WIDTH_OVERVIEW,
};
use crate::util::time::format_epoch_in;

/// Which sub-view of the overlay is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Overview,
    Details,
}

/// A download the shell should perform on the overlay's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub file_name: String,
}

/// State of the review detail overlay.
#[derive(Debug, Default)]
pub struct ReviewDetailState {
    review: Option<ReviewSegment>,
    pane: Pane,
    selected_event: Option<String>,
    upload: Option<Event>,
    item_states: HashMap<String, EventItemState>,
}

impl ReviewDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `review` the active review. Re-opening the review that is
    /// already shown keeps the current pane and selection.
    pub fn open(&mut self, review: ReviewSegment) {
        if self.review.as_ref().is_some_and(|r| r.id == review.id) {
            self.review = Some(review);
            return;
        }
        self.reset_view();
        tracing::debug!("Opening review {} on {}", review.id, review.camera);
        self.review = Some(review);
    }

    /// Dismiss the overlay: clears the review, selection and upload target
    /// and returns to the overview pane.
    pub fn close(&mut self) {
        if let Some(review) = self.review.take() {
            tracing::debug!("Closing review {}", review.id);
        }
        self.reset_view();
    }

    fn reset_view(&mut self) {
        self.pane = Pane::Overview;
        self.selected_event = None;
        self.upload = None;
        self.item_states.clear();
    }

    pub fn is_open(&self) -> bool {
        self.review.is_some()
    }

    pub fn review(&self) -> Option<&ReviewSegment> {
        self.review.as_ref()
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn selected_event_id(&self) -> Option<&str> {
        self.selected_event.as_deref()
    }

    /// The selected event's record within `events`.
    pub fn selected_event<'a>(&self, events: &'a [Event]) -> Option<&'a Event> {
        let id = self.selected_event.as_deref()?;
        events.iter().find(|e| e.id == id)
    }

    /// Switch to the lifecycle pane for `event_id`.
    pub fn show_details(&mut self, event_id: impl Into<String>) {
        self.selected_event = Some(event_id.into());
        self.pane = Pane::Details;
    }

    /// Return to the overview pane. The selection is kept so reopening the
    /// details pane shows the same event.
    pub fn show_overview(&mut self) {
        self.pane = Pane::Overview;
    }

    /// The details pane renders only with both the pane and a selection set.
    pub fn details_visible(&self) -> bool {
        self.pane == Pane::Details && self.selected_event.is_some()
    }

    pub fn overview_visible(&self) -> bool {
        self.is_open() && self.pane == Pane::Overview
    }

    // ── Data ────────────────────────────────────────────────────────

    /// Key and options of the event-list query. Disabled while no review
    /// is open.
    pub fn events_query(&self) -> (QueryKey, QueryOptions) {
        match &self.review {
            Some(review) => (
                QueryKey::event_ids(review.detection_ids_param()),
                QueryOptions::enabled_if(true),
            ),
            None => (QueryKey::event_ids(""), QueryOptions::enabled_if(false)),
        }
    }

    /// Issue the overlay's reads: config (no focus revalidation) and the
    /// review's events.
    pub fn request_data(&self, cache: &mut QueryCache) {
        cache.request(
            &QueryKey::Config,
            QueryOptions::enabled_if(true).without_focus_revalidation(),
        );
        let (key, options) = self.events_query();
        cache.request(&key, options);
    }

    /// Fetched events for the open review, in response order.
    pub fn events<'c>(&self, cache: &'c QueryCache) -> Option<&'c [Event]> {
        let (key, options) = self.events_query();
        if !options.enabled {
            return None;
        }
        cache.events(&key)
    }

    /// True iff a review is open, its events have loaded, and the number of
    /// events differs from the number of detections.
    pub fn has_mismatch(&self, events: Option<&[Event]>) -> bool {
        match (&self.review, events) {
            (Some(review), Some(events)) => events.len() != review.detection_count(),
            _ => false,
        }
    }

    /// Start time of the open review in local time, using the server's
    /// time format.
    pub fn formatted_date(&self, config: Option<&FrigateConfig>) -> Option<String> {
        self.formatted_date_in(config, &chrono::Local)
    }

    /// [`ReviewDetailState::formatted_date`] for an explicit time zone.
    pub fn formatted_date_in<Tz>(&self, config: Option<&FrigateConfig>, tz: &Tz) -> Option<String>
    where
        Tz: chrono::TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let review = self.review.as_ref()?;
        let pattern = FrigateConfig::time_format_or_default(config).timestamp_pattern();
        Some(format_epoch_in(review.start_time, pattern, tz))
    }

    // ── Upload ──────────────────────────────────────────────────────

    pub fn upload(&self) -> Option<&Event> {
        self.upload.as_ref()
    }

    pub fn set_upload(&mut self, event: Event) {
        self.upload = Some(event);
    }

    /// Closes the submission dialog.
    pub fn clear_upload(&mut self) {
        self.upload = None;
    }

    /// Record a successful submission of the upload target: every cached
    /// copy of the event gets the `new_upload` sentinel as its Frigate+ id.
    /// Returns how many cached records were patched.
    pub fn on_event_uploaded(&mut self, cache: &mut QueryCache) -> usize {
        let Some(upload) = self.upload.as_mut() else {
            return 0;
        };
        upload.plus_id = Some(NEW_UPLOAD_SENTINEL.to_owned());
        let patched = cache.mutate_event(&upload.id, |event| {
            event.plus_id = Some(NEW_UPLOAD_SENTINEL.to_owned());
        });
        tracing::info!("Marked {} as uploaded ({} cached records)", upload.id, patched);
        patched
    }

    // ── Tiles ───────────────────────────────────────────────────────

    /// Hover state for the tile of `event_id`, recreated whenever the
    /// device profile changes.
    pub fn item_state(&mut self, event_id: &str, profile: DeviceProfile) -> &mut EventItemState {
        let state = self
            .item_states
            .entry(event_id.to_owned())
            .or_insert_with(|| EventItemState::new(profile));
        if state.profile() != profile {
            *state = EventItemState::new(profile);
        }
        state
    }

    /// Carry out a tile request. Downloads need the shell (file dialog,
    /// disk) and are handed back.
    pub fn apply(&mut self, action: EventItemAction) -> Option<DownloadRequest> {
        match action {
            EventItemAction::SetUpload(event) => {
                self.set_upload(event);
                None
            }
            EventItemAction::ViewLifecycle(event_id) => {
                self.show_details(event_id);
                None
            }
            EventItemAction::Download { url, file_name } => {
                Some(DownloadRequest { url, file_name })
            }
        }
    }

    // ── Layout ──────────────────────────────────────────────────────

    pub fn overlay_kind(&self, profile: DeviceProfile) -> OverlayKind {
        profile.overlay_kind()
    }

    /// Tallest the bottom drawer may grow for a screen of `screen_height`.
    /// The drawer shrinks to its content below that.
    pub fn drawer_max_height(&self, screen_height: f32) -> f32 {
        (screen_height * DRAWER_MAX_HEIGHT_FRACTION).max(0.0)
    }

    /// Side sheet width for the current pane.
    pub fn sheet_width(&self) -> f32 {
        match self.pane {
            Pane::Overview => SHEET_WIDTH_OVERVIEW,
            Pane::Details => SHEET_WIDTH_DETAILS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::QueryData;
    use chrono::Utc;

    fn review(detections: &[&str]) -> ReviewSegment {
        serde_json::from_value(serde_json::json!({
            "id": "r1",
            "camera": "front_door",
            "start_time": 1709649000.0,
            "severity": "alert",
            "data": { "detections": detections, "zones": ["front_yard"] },
        }))
        .unwrap()
    }

    fn event(id: &str) -> Event {
        serde_json::from_value(serde_json::json!({
            "id": id, "label": "person", "has_snapshot": true, "has_clip": true,
        }))
        .unwrap()
    }

    #[test]
    fn test_closed_state_has_no_query() {
        let state = ReviewDetailState::new();
        let (_, options) = state.events_query();
        assert!(!options.enabled);
        assert!(!state.is_open());
        assert!(!state.has_mismatch(Some(&[])));
    }

    #[test]
    fn test_events_query_joins_detections() {
        let mut state = ReviewDetailState::new();
        state.open(review(&["a", "b", "c"]));
        let (key, options) = state.events_query();
        assert_eq!(key, QueryKey::event_ids("a,b,c"));
        assert!(options.enabled);
    }

    #[test]
    fn test_mismatch_only_when_counts_differ() {
        let mut state = ReviewDetailState::new();
        state.open(review(&["a", "b", "c"]));
        assert!(!state.has_mismatch(None), "pending fetch is not a mismatch");
        assert!(state.has_mismatch(Some(&[event("a"), event("c")])));
        assert!(!state.has_mismatch(Some(&[event("a"), event("b"), event("c")])));
    }

    #[test]
    fn test_close_resets_pane_and_selection() {
        let mut state = ReviewDetailState::new();
        state.open(review(&["a"]));
        state.show_details("a");
        state.set_upload(event("a"));
        state.close();
        assert_eq!(state.pane(), Pane::Overview);
        assert!(state.selected_event_id().is_none());
        assert!(state.upload().is_none());
        assert!(!state.details_visible());
    }

    #[test]
    fn test_reopening_other_review_resets_view() {
        let mut state = ReviewDetailState::new();
        state.open(review(&["a"]));
        state.show_details("a");

        state.open(review(&["a"]));
        assert!(state.details_visible(), "same review keeps its pane");

        let mut other = review(&["b"]);
        other.id = "r2".into();
        state.open(other);
        assert_eq!(state.pane(), Pane::Overview);
        assert!(state.selected_event_id().is_none());
    }

    #[test]
    fn test_formatted_date_respects_time_format() {
        let mut state = ReviewDetailState::new();
        state.open(review(&[]));
        let mut config = FrigateConfig::default();

        config.ui.time_format = crate::core::config::TimeFormat::TwentyFourHour;
        assert_eq!(
            state.formatted_date_in(Some(&config), &Utc).as_deref(),
            Some("Mar 5 2024, 14:30")
        );

        config.ui.time_format = crate::core::config::TimeFormat::TwelveHour;
        assert_eq!(
            state.formatted_date_in(Some(&config), &Utc).as_deref(),
            Some("Mar 5 2024, 02:30 PM")
        );
    }

    #[test]
    fn test_apply_view_lifecycle() {
        let mut state = ReviewDetailState::new();
        state.open(review(&["a"]));
        let download = state.apply(EventItemAction::ViewLifecycle("a".into()));
        assert!(download.is_none());
        assert_eq!(state.pane(), Pane::Details);
        assert_eq!(state.selected_event_id(), Some("a"));
        assert_eq!(state.sheet_width(), SHEET_WIDTH_DETAILS);
    }

    #[test]
    fn test_apply_download_is_handed_back() {
        let mut state = ReviewDetailState::new();
        let request = state.apply(EventItemAction::Download {
            url: "http://h/api/events/a/snapshot.jpg".into(),
            file_name: "a-snapshot.jpg".into(),
        });
        assert_eq!(
            request.map(|r| r.file_name),
            Some("a-snapshot.jpg".to_string())
        );
    }

    #[test]
    fn test_item_state_follows_profile() {
        let mut state = ReviewDetailState::new();
        assert!(!state.item_state("a", DeviceProfile::DESKTOP).actions_visible());
        assert!(state.item_state("a", DeviceProfile::MOBILE).actions_visible());
    }

    #[test]
    fn test_upload_marks_cached_event() {
        struct NoApi(crate::core::api::ApiHost);
        impl crate::core::api::FrigateApi for NoApi {
            fn host(&self) -> &crate::core::api::ApiHost {
                &self.0
            }
            fn config(&self) -> crate::util::error::Result<FrigateConfig> {
                Ok(FrigateConfig::default())
            }
            fn events_by_ids(&self, _: &str) -> crate::util::error::Result<Vec<Event>> {
                Ok(Vec::new())
            }
            fn reviews(&self, _: usize) -> crate::util::error::Result<Vec<ReviewSegment>> {
                Ok(Vec::new())
            }
            fn timeline(
                &self,
                _: &str,
            ) -> crate::util::error::Result<Vec<crate::core::lifecycle::TimelineEntry>> {
                Ok(Vec::new())
            }
            fn fetch_bytes(&self, _: &str) -> crate::util::error::Result<Vec<u8>> {
                Ok(Vec::new())
            }
            fn submit_to_plus(&self, _: &str) -> crate::util::error::Result<Option<String>> {
                Ok(None)
            }
        }

        let host = crate::core::api::ApiHost::parse("http://h").unwrap();
        let mut cache = QueryCache::new(std::sync::Arc::new(NoApi(host)));
        let mut state = ReviewDetailState::new();
        state.open(review(&["a", "b"]));
        let (key, _) = state.events_query();
        cache.insert(key.clone(), QueryData::Events(vec![event("a"), event("b")]));

        assert_eq!(state.on_event_uploaded(&mut cache), 0, "no target, no patch");

        state.set_upload(event("a"));
        assert_eq!(state.on_event_uploaded(&mut cache), 1);
        let events = state.events(&cache).unwrap();
        assert_eq!(events[0].plus_id.as_deref(), Some(NEW_UPLOAD_SENTINEL));
        assert!(events[1].plus_id.is_none());
    }

    #[test]
    fn test_drawer_is_capped_at_eighty_percent() {
        let state = ReviewDetailState::new();
        assert_eq!(state.drawer_max_height(1000.0), 800.0);
        assert_eq!(state.drawer_max_height(0.0), 0.0);
    }
}
