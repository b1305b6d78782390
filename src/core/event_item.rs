//! State and rules for one event tile in the overview pane.
//!
//! A tile shows the event's image and, while revealed, a row of action
//! chips. Tiles never mutate anything themselves: activating a chip
//! produces an [`EventItemAction`] that the overlay applies.

use crate::core::api::ApiHost;
use crate::core::config::FrigateConfig;
use crate::core::device::DeviceProfile;
use crate::core::event::Event;
use crate::core::media;

/// Affordances a tile can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipAction {
    /// Save the displayed image.
    Download,
    /// Send the snapshot to Frigate+.
    SubmitToPlus,
    /// Open the object lifecycle pane.
    ViewLifecycle,
}

impl ChipAction {
    /// Glyph drawn on the chip.
    pub fn icon(self) -> &'static str {
        match self {
            ChipAction::Download => "\u{2B07}",
            ChipAction::SubmitToPlus => "\u{2795}",
            ChipAction::ViewLifecycle => "\u{1F504}",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            ChipAction::Download => "Download",
            ChipAction::SubmitToPlus => "Submit to Frigate+",
            ChipAction::ViewLifecycle => "View Object Lifecycle",
        }
    }

    /// Translate a click on this chip into a request for the overlay.
    pub fn activate(self, host: &ApiHost, event: &Event) -> EventItemAction {
        match self {
            ChipAction::Download => EventItemAction::Download {
                url: media::image_url(host, event),
                file_name: media::download_file_name(event),
            },
            ChipAction::SubmitToPlus => EventItemAction::SetUpload(event.clone()),
            ChipAction::ViewLifecycle => EventItemAction::ViewLifecycle(event.id.clone()),
        }
    }
}

/// Request emitted by a tile for its owner to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum EventItemAction {
    Download { url: String, file_name: String },
    SetUpload(Event),
    ViewLifecycle(String),
}

/// Chips shown for `event`, in display order.
///
/// Download is always offered. Submission needs a snapshot, no previous
/// submission, and Frigate+ enabled on the server. The lifecycle view
/// needs a recording clip.
pub fn available_actions(event: &Event, config: Option<&FrigateConfig>) -> Vec<ChipAction> {
    let mut actions = vec![ChipAction::Download];
    if event.has_snapshot && !event.is_submitted() && FrigateConfig::plus_enabled(config) {
        actions.push(ChipAction::SubmitToPlus);
    }
    if event.has_clip {
        actions.push(ChipAction::ViewLifecycle);
    }
    actions
}

/// Gradient scrims keep chips legible over full snapshots; thumbnails are
/// drawn centred without them.
pub fn has_scrims(event: &Event) -> bool {
    event.has_snapshot
}

/// Hover tracking for one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventItemState {
    profile: DeviceProfile,
    hovered: bool,
    pointer_inside: bool,
}

impl EventItemState {
    /// Touch-primary devices start revealed since they cannot hover.
    pub fn new(profile: DeviceProfile) -> Self {
        Self {
            profile,
            hovered: profile.touch_primary,
            pointer_inside: false,
        }
    }

    /// Whether the chip row is visible.
    pub fn actions_visible(&self) -> bool {
        self.hovered
    }

    /// Pointer entered the tile. Only desktop tiles react.
    pub fn pointer_entered(&mut self) {
        if self.profile.is_desktop() {
            self.hovered = true;
        }
    }

    /// Pointer left the tile. Only desktop tiles react.
    pub fn pointer_left(&mut self) {
        if self.profile.is_desktop() {
            self.hovered = false;
        }
    }

    /// Feed the current pointer containment, firing enter/leave on change.
    pub fn track_pointer(&mut self, inside: bool) {
        match (self.pointer_inside, inside) {
            (false, true) => self.pointer_entered(),
            (true, false) => self.pointer_left(),
            _ => {}
        }
        self.pointer_inside = inside;
    }

    pub fn profile(&self) -> DeviceProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::device::FormFactor;

    fn event(has_snapshot: bool, has_clip: bool, plus_id: Option<&str>) -> Event {
        serde_json::from_value(serde_json::json!({
            "id": "e1",
            "label": "person",
            "has_snapshot": has_snapshot,
            "has_clip": has_clip,
            "plus_id": plus_id,
        }))
        .unwrap()
    }

    fn plus(enabled: bool) -> FrigateConfig {
        let mut config = FrigateConfig::default();
        config.plus.enabled = enabled;
        config
    }

    #[test]
    fn test_submit_requires_all_conditions() {
        let enabled = plus(true);
        let eligible = event(true, false, None);
        assert!(available_actions(&eligible, Some(&enabled)).contains(&ChipAction::SubmitToPlus));

        let no_snapshot = event(false, false, None);
        let submitted = event(true, false, Some("abc"));
        for (e, cfg) in [
            (&no_snapshot, Some(&enabled)),
            (&submitted, Some(&enabled)),
            (&eligible, Some(&plus(false))),
            (&eligible, None),
        ] {
            assert!(
                !available_actions(e, cfg).contains(&ChipAction::SubmitToPlus),
                "submit chip must be hidden for {e:?} / {cfg:?}"
            );
        }
    }

    #[test]
    fn test_lifecycle_requires_clip() {
        assert_eq!(
            available_actions(&event(false, true, None), None),
            vec![ChipAction::Download, ChipAction::ViewLifecycle]
        );
        assert_eq!(
            available_actions(&event(false, false, None), None),
            vec![ChipAction::Download]
        );
    }

    #[test]
    fn test_touch_device_starts_revealed() {
        assert!(EventItemState::new(DeviceProfile::MOBILE).actions_visible());
        assert!(!EventItemState::new(DeviceProfile::DESKTOP).actions_visible());
    }

    #[test]
    fn test_desktop_hover_toggles() {
        let mut state = EventItemState::new(DeviceProfile::DESKTOP);
        state.track_pointer(true);
        assert!(state.actions_visible());
        state.track_pointer(true);
        assert!(state.actions_visible());
        state.track_pointer(false);
        assert!(!state.actions_visible());
    }

    #[test]
    fn test_non_desktop_non_touch_never_reveals() {
        let profile = DeviceProfile {
            form_factor: FormFactor::Mobile,
            touch_primary: false,
        };
        let mut state = EventItemState::new(profile);
        state.pointer_entered();
        assert!(!state.actions_visible());
    }

    #[test]
    fn test_activate_maps_to_actions() {
        let host = ApiHost::parse("http://h").unwrap();
        let e = event(false, true, None);
        assert_eq!(
            ChipAction::Download.activate(&host, &e),
            EventItemAction::Download {
                url: "http://h/api/events/e1/thumbnail.jpg".into(),
                file_name: "e1-thumbnail.jpg".into(),
            }
        );
        assert_eq!(
            ChipAction::ViewLifecycle.activate(&host, &e),
            EventItemAction::ViewLifecycle("e1".into())
        );
        assert_eq!(
            ChipAction::SubmitToPlus.activate(&host, &e),
            EventItemAction::SetUpload(e.clone())
        );
    }

    #[test]
    fn test_scrims_only_for_snapshots() {
        assert!(has_scrims(&event(true, false, None)));
        assert!(!has_scrims(&event(false, false, None)));
    }
}
