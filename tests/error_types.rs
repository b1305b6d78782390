//! Integration tests for error type construction and display.

use frigate_review::core::api::ApiHost;
use frigate_review::util::error::{status_err, FrigateReviewError};

#[test]
fn status_error_displays_code_and_url() {
    let err = status_err(404, "http://nvr/api/events/x/snapshot.jpg");
    let msg = err.to_string();
    assert!(msg.contains("404"), "Error message should contain status: {msg}");
    assert!(
        msg.contains("snapshot.jpg"),
        "Error message should contain the URL: {msg}"
    );
}

#[test]
fn invalid_url_error_comes_from_host_parsing() {
    let err = ApiHost::parse("ftp://nvr").unwrap_err();
    assert!(matches!(err, FrigateReviewError::InvalidUrl(_)));
    let msg = err.to_string();
    assert!(msg.contains("ftp://nvr"), "Should contain detail: {msg}");
}

#[test]
fn decode_error_converts_from_serde_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: FrigateReviewError = json_err.into();
    assert!(matches!(err, FrigateReviewError::Decode(_)));
    assert!(err.to_string().starts_with("Failed to decode response"));
}

#[test]
fn io_error_converts_from_std() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err: FrigateReviewError = io_err.into();
    let msg = err.to_string();
    assert!(msg.contains("file missing"), "Should contain detail: {msg}");
}

#[test]
fn download_error_preserves_message() {
    let err = FrigateReviewError::Download("disk full".into());
    let msg = err.to_string();
    assert!(msg.contains("disk full"), "Should contain detail: {msg}");
}

#[test]
fn plus_error_preserves_server_message() {
    let err = FrigateReviewError::Plus("Frigate+ is not configured".into());
    let msg = err.to_string();
    assert!(msg.contains("not configured"), "Should contain detail: {msg}");
}
