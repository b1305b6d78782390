//! The subset of the Frigate server configuration the viewer reads.
//!
//! `GET api/config` returns the whole server configuration; only the UI
//! time format and the Frigate+ switch matter here, everything else is
//! ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Server configuration as seen by the viewer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrigateConfig {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub plus: PlusConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub time_format: TimeFormat,
}

/// Frigate+ integration settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlusConfig {
    #[serde(default)]
    pub enabled: bool,
}

/// Clock style configured on the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// Follow the client; rendered as 12-hour.
    #[default]
    #[serde(rename = "browser")]
    Browser,
    #[serde(rename = "12hour")]
    TwelveHour,
    #[serde(rename = "24hour")]
    TwentyFourHour,
}

impl TimeFormat {
    /// Pattern for the overlay timestamp, e.g. `Mar 5 2024, 14:30`.
    pub fn timestamp_pattern(self) -> &'static str {
        match self {
            TimeFormat::TwentyFourHour => "%b %-d %Y, %H:%M",
            TimeFormat::Browser | TimeFormat::TwelveHour => "%b %-d %Y, %I:%M %p",
        }
    }

    /// Pattern for lifecycle rows, which need second precision.
    pub fn time_of_day_pattern(self) -> &'static str {
        match self {
            TimeFormat::TwentyFourHour => "%H:%M:%S",
            TimeFormat::Browser | TimeFormat::TwelveHour => "%I:%M:%S %p",
        }
    }
}

impl FrigateConfig {
    /// Time format, defaulting to 12-hour while the config is still loading.
    pub fn time_format_or_default(config: Option<&FrigateConfig>) -> TimeFormat {
        config.map(|c| c.ui.time_format).unwrap_or_default()
    }

    /// Whether Frigate+ submission is available.
    pub fn plus_enabled(config: Option<&FrigateConfig>) -> bool {
        config.is_some_and(|c| c.plus.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "mqtt": {"host": "broker"},
            "ui": {"time_format": "24hour", "timezone": null},
            "plus": {"enabled": true},
            "cameras": {}
        }"#;
        let config: FrigateConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.ui.time_format, TimeFormat::TwentyFourHour);
        assert!(config.plus.enabled);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: FrigateConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.ui.time_format, TimeFormat::Browser);
        assert!(!config.plus.enabled);
    }

    #[test]
    fn test_only_24hour_uses_24_hour_clock() {
        assert!(TimeFormat::TwentyFourHour.timestamp_pattern().contains("%H"));
        assert!(TimeFormat::TwelveHour.timestamp_pattern().contains("%p"));
        assert!(TimeFormat::Browser.timestamp_pattern().contains("%p"));
    }

    #[test]
    fn test_plus_disabled_without_config() {
        assert!(!FrigateConfig::plus_enabled(None));
        assert_eq!(
            FrigateConfig::time_format_or_default(None),
            TimeFormat::Browser
        );
    }
}
