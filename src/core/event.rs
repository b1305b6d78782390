//! Tracked-object events as returned by `GET api/event_ids`.
//!
//! One [`Event`] is a single object Frigate followed across frames, with
//! its best confidence score and the media that was kept for it.

use serde::{Deserialize, Deserializer, Serialize};

/// A detected-object record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier; matches an entry of a review's `detections`.
    pub id: String,

    /// Object class, e.g. `person`.
    pub label: String,

    /// Recognised identity (face name, plate, delivery company).
    #[serde(default, deserialize_with = "sub_label_compat")]
    pub sub_label: Option<String>,

    #[serde(default)]
    pub camera: String,

    #[serde(default)]
    pub start_time: f64,

    #[serde(default)]
    pub end_time: Option<f64>,

    /// A full-frame snapshot was saved.
    #[serde(default)]
    pub has_snapshot: bool,

    /// A recording clip covers the event.
    #[serde(default)]
    pub has_clip: bool,

    /// Frigate+ identifier once the snapshot has been submitted.
    #[serde(default)]
    pub plus_id: Option<String>,

    #[serde(default)]
    pub zones: Vec<String>,

    #[serde(default)]
    pub data: EventData,
}

/// Detector payload of an [`Event`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    /// Highest confidence reached while tracking, 0..1.
    #[serde(default)]
    pub top_score: f64,

    #[serde(default)]
    pub score: f64,
}

impl Event {
    /// Name shown in the overlay: the sub label when one was recognised,
    /// otherwise the object class.
    pub fn display_label(&self) -> &str {
        self.sub_label.as_deref().unwrap_or(&self.label)
    }

    /// Rounded confidence percentage of [`EventData::top_score`].
    pub fn confidence_percent(&self) -> u32 {
        crate::util::text::confidence_percent(self.data.top_score)
    }

    /// Whether the snapshot was already sent to Frigate+.
    pub fn is_submitted(&self) -> bool {
        self.plus_id.is_some()
    }
}

/// Accept `"name"`, `null`, or the older `["name", score]` pair.
fn sub_label_compat<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Name(String),
        Scored(String, f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Name(name)) | Some(Raw::Scored(name, _)) => Some(name),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_event() {
        let json = r#"{"id":"a","label":"person","has_snapshot":true,"data":{"top_score":0.91}}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.display_label(), "person");
        assert_eq!(event.confidence_percent(), 91);
        assert!(event.has_snapshot);
        assert!(!event.has_clip);
        assert!(!event.is_submitted());
    }

    #[test]
    fn test_sub_label_string_wins() {
        let json = r#"{"id":"a","label":"person","sub_label":"jane"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.display_label(), "jane");
    }

    #[test]
    fn test_sub_label_pair_and_null() {
        let pair: Event =
            serde_json::from_str(r#"{"id":"a","label":"car","sub_label":["ABC123",0.8]}"#).unwrap();
        assert_eq!(pair.sub_label.as_deref(), Some("ABC123"));

        let null: Event =
            serde_json::from_str(r#"{"id":"a","label":"car","sub_label":null}"#).unwrap();
        assert!(null.sub_label.is_none());
    }
}
