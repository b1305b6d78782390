//! Object lifecycle: the timeline Frigate records for one tracked object.
//!
//! Each [`TimelineEntry`] marks a state change (first seen, entered a zone,
//! stopped moving, left). The details pane lists them in order with a
//! sentence describing each change.

use serde::{Deserialize, Serialize};

use crate::util::text::{capitalize_words, humanize};

/// Kind of lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleClass {
    Visible,
    EnteredZone,
    Attribute,
    Active,
    Stationary,
    Heard,
    External,
    Gone,
    #[serde(other)]
    Unknown,
}

/// One row of `GET api/timeline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub timestamp: f64,

    #[serde(default)]
    pub camera: String,

    /// Event the entry belongs to.
    #[serde(default)]
    pub source_id: String,

    pub class_type: LifecycleClass,

    #[serde(default)]
    pub data: TimelineData,
}

/// Object state captured with a [`TimelineEntry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineData {
    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub sub_label: Option<String>,

    /// Zones the object occupied at this moment.
    #[serde(default)]
    pub zones: Vec<String>,

    /// Attribute detected on the object (`face`, `license_plate`, ...).
    #[serde(default)]
    pub attribute: Option<String>,
}

impl TimelineEntry {
    /// Sentence describing this transition, e.g. `Person entered Front Yard`.
    pub fn description(&self) -> String {
        let label = self.subject();
        match self.class_type {
            LifecycleClass::Visible | LifecycleClass::External => format!("{label} detected"),
            LifecycleClass::EnteredZone => {
                let zones = self
                    .data
                    .zones
                    .iter()
                    .map(|z| capitalize_words(&humanize(z)))
                    .collect::<Vec<_>>()
                    .join(" and ");
                format!("{label} entered {zones}")
            }
            LifecycleClass::Active => format!("{label} became active"),
            LifecycleClass::Stationary => format!("{label} became stationary"),
            LifecycleClass::Attribute => match self.data.attribute.as_deref() {
                Some(attr @ ("face" | "license_plate")) => {
                    format!("{} detected for {label}", humanize(attr))
                }
                Some(attr) => {
                    let attr = capitalize_words(&humanize(attr));
                    match self.data.sub_label.as_deref() {
                        Some(sub) => format!("{sub} recognized as {attr}"),
                        None => format!("{label} recognized as {attr}"),
                    }
                }
                None => format!("{label} attribute detected"),
            },
            LifecycleClass::Heard => format!("{label} heard"),
            LifecycleClass::Gone => format!("{label} left"),
            LifecycleClass::Unknown => format!("{label} updated"),
        }
    }

    /// Capitalised label with the sub label in parentheses when known.
    fn subject(&self) -> String {
        let label = capitalize_words(&humanize(&self.data.label));
        match self.data.sub_label.as_deref() {
            Some(sub) if !sub.is_empty() => format!("{label} ({sub})"),
            _ => label,
        }
    }
}

/// Entries in chronological order. Ties keep server order.
pub fn sorted_entries(entries: &[TimelineEntry]) -> Vec<&TimelineEntry> {
    let mut sorted: Vec<&TimelineEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
    sorted
}
