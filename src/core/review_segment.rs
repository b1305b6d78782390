//! Review segments: time windows Frigate flagged for review.
//!
//! A segment groups every detection that happened on one camera during a
//! burst of activity. The overlay treats it as immutable input.

use serde::{Deserialize, Serialize};

/// How urgently Frigate classified the segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Alert,
    Detection,
}

impl Severity {
    /// Label shown in the review table.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Alert => "Alert",
            Severity::Detection => "Detection",
        }
    }
}

/// A single review segment as returned by `GET api/review`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSegment {
    /// Segment identifier, e.g. `1709649000.123-abc12`.
    pub id: String,

    /// Camera the segment was recorded on (snake_case identifier).
    pub camera: String,

    /// Start of the segment in epoch seconds.
    pub start_time: f64,

    /// End of the segment; `None` while the segment is still open.
    #[serde(default)]
    pub end_time: Option<f64>,

    #[serde(default)]
    pub has_been_reviewed: bool,

    pub severity: Severity,

    /// Server-side path of the segment thumbnail.
    #[serde(default)]
    pub thumb_path: String,

    /// Detection payload embedded by Frigate.
    pub data: ReviewData,
}

/// Detection payload of a [`ReviewSegment`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewData {
    /// Event identifiers of every tracked object in the segment, in the
    /// order Frigate recorded them.
    #[serde(default)]
    pub detections: Vec<String>,

    /// Distinct object labels seen in the segment.
    #[serde(default)]
    pub objects: Vec<String>,

    #[serde(default)]
    pub sub_labels: Vec<String>,

    /// Zones entered during the segment.
    #[serde(default)]
    pub zones: Vec<String>,

    #[serde(default)]
    pub audio: Vec<String>,
}

impl ReviewSegment {
    /// Comma-joined detection identifiers, the `ids` parameter of the
    /// `event_ids` query.
    pub fn detection_ids_param(&self) -> String {
        self.data.detections.join(",")
    }

    /// Number of detections the segment references.
    pub fn detection_count(&self) -> usize {
        self.data.detections.len()
    }

    /// Objects and audio labels for the review table's summary column.
    pub fn objects_summary(&self) -> String {
        self.data
            .objects
            .iter()
            .chain(self.data.audio.iter())
            .map(|label| crate::util::text::humanize(label))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
