//! Blocking client for the Frigate HTTP API.
//!
//! [`FrigateApi`] is the seam between the query cache and the network: the
//! cache only ever talks to a `dyn FrigateApi`, so tests substitute an
//! in-memory implementation. [`HttpFrigateApi`] is the real client, built
//! on `reqwest::blocking` and called from query worker threads.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::core::config::FrigateConfig;
use crate::core::event::Event;
use crate::core::lifecycle::TimelineEntry;
use crate::core::review_segment::ReviewSegment;
use crate::util::constants::HTTP_TIMEOUT_SECS;
use crate::util::error::{status_err, FrigateReviewError, Result};

/// Base address of a Frigate server. Always ends in `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHost {
    base: String,
}

impl ApiHost {
    /// Validate and normalise a user-supplied server address.
    ///
    /// Accepts `http://` and `https://` URLs with or without a trailing
    /// slash; anything else is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| FrigateReviewError::InvalidUrl(trimmed.to_owned()))?;
        if rest.trim_matches('/').is_empty() || rest.contains(char::is_whitespace) {
            return Err(FrigateReviewError::InvalidUrl(trimmed.to_owned()));
        }
        let mut base = trimmed.to_owned();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self { base })
    }

    /// The normalised base URL.
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Absolute URL of an API path such as `config` or `events/x/plus`.
    pub fn api(&self, path: &str) -> String {
        format!("{}api/{}", self.base, path.trim_start_matches('/'))
    }

    pub fn snapshot_url(&self, event_id: &str) -> String {
        self.api(&format!("events/{event_id}/snapshot.jpg"))
    }

    pub fn thumbnail_url(&self, event_id: &str) -> String {
        self.api(&format!("events/{event_id}/thumbnail.jpg"))
    }
}

/// Operations the viewer needs from a Frigate server.
pub trait FrigateApi: Send + Sync {
    /// Server this client talks to.
    fn host(&self) -> &ApiHost;

    /// `GET api/config`.
    fn config(&self) -> Result<FrigateConfig>;

    /// `GET api/event_ids?ids=…`. Response order is preserved.
    fn events_by_ids(&self, ids: &str) -> Result<Vec<Event>>;

    /// `GET api/review?limit=…`, newest first.
    fn reviews(&self, limit: usize) -> Result<Vec<ReviewSegment>>;

    /// `GET api/timeline?source_id=…`.
    fn timeline(&self, source_id: &str) -> Result<Vec<TimelineEntry>>;

    /// Raw bytes of any URL on the server (snapshots, thumbnails).
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;

    /// `POST api/events/{id}/plus`. Returns the Frigate+ identifier when the
    /// server reports one.
    fn submit_to_plus(&self, event_id: &str) -> Result<Option<String>>;
}

/// Build the HTTP client for `host`.
pub fn make_frigate_client(host: ApiHost) -> Result<Arc<dyn FrigateApi>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .default_headers(json_headers_map())
        .build()?;
    tracing::info!("Frigate client ready for {}", host.as_str());
    Ok(Arc::new(HttpFrigateApi { client, host }))
}

/// `reqwest`-backed [`FrigateApi`].
pub struct HttpFrigateApi {
    client: reqwest::blocking::Client,
    host: ApiHost,
}

impl HttpFrigateApi {
    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.host.api(path);
        let response = self.client.get(&url).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_err(status.as_u16(), url));
        }
        let body = response.bytes()?;
        let result = serde_json::from_slice(&body)?;
        tracing::debug!("GET {url} ({} bytes)", body.len());
        Ok(result)
    }
}

#[derive(Debug, Deserialize)]
struct PlusResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    plus_id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl FrigateApi for HttpFrigateApi {
    fn host(&self) -> &ApiHost {
        &self.host
    }

    fn config(&self) -> Result<FrigateConfig> {
        self.get_json("config", &[])
    }

    fn events_by_ids(&self, ids: &str) -> Result<Vec<Event>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.get_json("event_ids", &[("ids", ids.to_owned())])
    }

    fn reviews(&self, limit: usize) -> Result<Vec<ReviewSegment>> {
        self.get_json("review", &[("limit", limit.to_string())])
    }

    fn timeline(&self, source_id: &str) -> Result<Vec<TimelineEntry>> {
        self.get_json("timeline", &[("source_id", source_id.to_owned())])
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_err(status.as_u16(), url));
        }
        let bytes = response.bytes()?;
        tracing::debug!("GET {url} ({} bytes)", bytes.len());
        Ok(bytes.to_vec())
    }

    fn submit_to_plus(&self, event_id: &str) -> Result<Option<String>> {
        let url = self.host.api(&format!("events/{event_id}/plus"));
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "include_annotation": 1 }))
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        let plus_id = plus_outcome(status, &body).inspect_err(|e| {
            tracing::warn!("Frigate+ submission of {event_id} rejected: {e}");
        })?;
        tracing::info!("Submitted {event_id} to Frigate+ (plus_id: {:?})", plus_id);
        Ok(plus_id)
    }
}

/// Interpret the reply to a Frigate+ submission.
///
/// A rejection carries the server's `message` when it sent one. A success
/// status with a body that is not the expected JSON is a decode error.
fn plus_outcome(status: u16, body: &str) -> Result<Option<String>> {
    let parsed = serde_json::from_str::<PlusResponse>(body);
    let success = (200..300).contains(&status);
    match parsed {
        Ok(reply) if success && reply.success => Ok(reply.plus_id),
        Ok(reply) => Err(FrigateReviewError::Plus(
            reply
                .message
                .unwrap_or_else(|| format!("server returned {status}")),
        )),
        Err(e) if success => Err(e.into()),
        Err(_) => Err(FrigateReviewError::Plus(format!("server returned {status}"))),
    }
}

fn json_headers_map() -> reqwest::header::HeaderMap {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    );
    headers
}
