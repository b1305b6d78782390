//! Timestamp formatting helpers for FrigateReview.
//!
//! Frigate reports times as fractional epoch seconds. Everything shown in
//! the UI goes through these helpers so the review list, the overlay and
//! the lifecycle view agree on formatting.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Convert fractional epoch seconds into a UTC timestamp.
///
/// Non-finite or out-of-range inputs collapse to the Unix epoch rather than
/// failing; a malformed time should never blank the whole overlay.
pub fn epoch_to_utc(epoch: f64) -> DateTime<Utc> {
    if !epoch.is_finite() {
        return DateTime::<Utc>::UNIX_EPOCH;
    }
    let secs = epoch.floor();
    let nanos = ((epoch - secs) * 1_000_000_000.0).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Format epoch seconds with a `strftime` pattern in the given time zone.
pub fn format_epoch_in<Tz>(epoch: f64, pattern: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    epoch_to_utc(epoch)
        .with_timezone(tz)
        .format(pattern)
        .to_string()
}

/// Format epoch seconds with a `strftime` pattern in local time.
pub fn format_epoch(epoch: f64, pattern: &str) -> String {
    format_epoch_in(epoch, pattern, &Local)
}

/// Format a `std::time::Duration` into a human-readable string.
///
/// Used for review segment lengths and query timings.
/// Examples: `0.3s`, `1.2s`, `45.6s`, `2.5m`.
pub fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.01 {
        format!("{:.1}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}m")
    }
}

/// Length of a segment given its start and optional end (epoch seconds).
///
/// Segments still in progress have no end; `None` is returned for them and
/// for inverted ranges.
pub fn segment_duration(start: f64, end: Option<f64>) -> Option<std::time::Duration> {
    let end = end?;
    let secs = end - start;
    if secs.is_finite() && secs >= 0.0 {
        Some(std::time::Duration::from_secs_f64(secs))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_to_utc_keeps_fraction() {
        let ts = epoch_to_utc(1_709_649_000.5);
        assert_eq!(ts.timestamp(), 1_709_649_000);
        assert_eq!(ts.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_epoch_to_utc_nan_is_epoch() {
        assert_eq!(epoch_to_utc(f64::NAN), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_format_epoch_in_utc() {
        let s = format_epoch_in(1_709_649_000.0, "%Y-%m-%d %H:%M", &Utc);
        assert_eq!(s, "2024-03-05 14:30");
    }

    #[test]
    fn test_segment_duration_open_segment() {
        assert!(segment_duration(10.0, None).is_none());
        assert!(segment_duration(10.0, Some(5.0)).is_none());
        assert_eq!(
            segment_duration(10.0, Some(12.5)),
            Some(std::time::Duration::from_millis(2500))
        );
    }
}
