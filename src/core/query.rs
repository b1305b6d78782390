//! Shared query cache: keyed, deduplicated, background-fetched API reads.
//!
//! Every piece of remote data the UI shows goes through [`QueryCache`].
//! A render pass calls [`QueryCache::request`] with a [`QueryKey`] and
//! [`QueryOptions`]; the first request for a key spawns a worker thread,
//! later requests for the same key reuse the entry and never start a
//! second fetch while one is in flight. Workers report back over a
//! bounded [`crossbeam_channel`] which the UI drains once per frame via
//! [`QueryCache::poll`].
//!
//! Each fetch carries a generation number. A result is only applied if
//! the entry still expects that generation, so responses that arrive after
//! an invalidation or a server change are discarded.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};

use crate::core::api::FrigateApi;
use crate::core::config::FrigateConfig;
use crate::core::event::Event;
use crate::core::lifecycle::TimelineEntry;
use crate::core::media::{decode_image, DecodedImage};
use crate::core::review_segment::ReviewSegment;
use crate::util::constants::{MAX_CACHE_ENTRIES, QUERY_CHANNEL_BOUND};
use crate::util::error::Result;

/// Identity of a cached read. Equal keys share one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// `api/config`.
    Config,
    /// `api/event_ids` with comma-joined `ids`.
    EventIds { ids: String },
    /// `api/review` with a result limit.
    Reviews { limit: usize },
    /// `api/timeline` for one event.
    Timeline { source_id: String },
    /// Decoded image at an absolute URL.
    Image { url: String },
}

impl QueryKey {
    pub fn event_ids(ids: impl Into<String>) -> Self {
        QueryKey::EventIds { ids: ids.into() }
    }

    pub fn timeline(source_id: impl Into<String>) -> Self {
        QueryKey::Timeline {
            source_id: source_id.into(),
        }
    }

    pub fn image(url: impl Into<String>) -> Self {
        QueryKey::Image { url: url.into() }
    }

    fn is_image(&self) -> bool {
        matches!(self, QueryKey::Image { .. })
    }
}

/// Payload stored for a key.
#[derive(Debug, Clone)]
pub enum QueryData {
    Config(FrigateConfig),
    Events(Vec<Event>),
    Reviews(Vec<ReviewSegment>),
    Timeline(Vec<TimelineEntry>),
    Image(Arc<DecodedImage>),
}

/// Per-request behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// When `false` the request is skipped entirely: no entry, no fetch.
    pub enabled: bool,
    /// Refetch when the window regains focus.
    pub revalidate_on_focus: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            revalidate_on_focus: true,
        }
    }
}

impl QueryOptions {
    /// Options that only fetch when `enabled` holds.
    pub fn enabled_if(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Same options with focus revalidation turned off.
    pub fn without_focus_revalidation(self) -> Self {
        Self {
            revalidate_on_focus: false,
            ..self
        }
    }
}

/// Observable state of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never requested (or requested while disabled).
    Idle,
    /// First fetch still running.
    Loading,
    /// Data present; a revalidation may be running in the background.
    Ready,
    /// Last fetch failed and no data is cached.
    Failed,
}

#[derive(Debug)]
struct QueryEntry {
    data: Option<QueryData>,
    error: Option<String>,
    /// Generation of the outstanding fetch, if any.
    pending: Option<u64>,
    revalidate_on_focus: bool,
    last_used: u64,
}

/// Message sent from a worker thread back to the cache.
#[derive(Debug)]
struct QueryResult {
    key: QueryKey,
    generation: u64,
    outcome: std::result::Result<QueryData, String>,
}

/// The cache itself. Owned by the application and shared with every view
/// by `&mut` during a frame.
pub struct QueryCache {
    api: Arc<dyn FrigateApi>,
    entries: HashMap<QueryKey, QueryEntry>,
    tx: Sender<QueryResult>,
    rx: Receiver<QueryResult>,
    next_generation: u64,
    use_counter: u64,
    focused: bool,
    last_error: Option<(QueryKey, String)>,
    /// URLs of image entries dropped by eviction, not yet collected.
    evicted_images: Vec<String>,
}

impl QueryCache {
    pub fn new(api: Arc<dyn FrigateApi>) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(QUERY_CHANNEL_BOUND);
        Self {
            api,
            entries: HashMap::new(),
            tx,
            rx,
            next_generation: 1,
            use_counter: 0,
            focused: true,
            last_error: None,
            evicted_images: Vec::new(),
        }
    }

    /// Client used for fetches (and by views that need URLs).
    pub fn api(&self) -> &Arc<dyn FrigateApi> {
        &self.api
    }

    /// Point the cache at a different server. Everything cached so far
    /// belonged to the old server and is dropped.
    pub fn set_api(&mut self, api: Arc<dyn FrigateApi>) {
        tracing::info!("Query cache switched to {}", api.host().as_str());
        self.api = api;
        self.entries.clear();
        self.last_error = None;
        self.evicted_images.clear();
    }

    /// Ensure `key` is cached or being fetched.
    ///
    /// Disabled requests are ignored. An entry with data, a pending fetch,
    /// or a recorded failure is left alone; use [`QueryCache::invalidate`]
    /// to force a refetch.
    pub fn request(&mut self, key: &QueryKey, options: QueryOptions) {
        if !options.enabled {
            return;
        }
        self.use_counter += 1;
        let stamp = self.use_counter;

        if let Some(entry) = self.entries.get_mut(key) {
            entry.last_used = stamp;
            entry.revalidate_on_focus = options.revalidate_on_focus;
            return;
        }

        self.evict_if_full();
        self.entries.insert(
            key.clone(),
            QueryEntry {
                data: None,
                error: None,
                pending: None,
                revalidate_on_focus: options.revalidate_on_focus,
                last_used: stamp,
            },
        );
        self.spawn_fetch(key.clone());
    }

    /// Refetch an existing entry, keeping its current data visible until
    /// the new result arrives. Unknown keys are ignored.
    pub fn invalidate(&mut self, key: &QueryKey) {
        if self.entries.contains_key(key) {
            self.spawn_fetch(key.clone());
        }
    }

    /// Track window focus; regaining it revalidates every idle entry whose
    /// options allow it.
    pub fn set_focused(&mut self, focused: bool) {
        let regained = focused && !self.focused;
        self.focused = focused;
        if !regained {
            return;
        }
        let keys: Vec<QueryKey> = self
            .entries
            .iter()
            .filter(|(_, e)| e.revalidate_on_focus && e.pending.is_none())
            .map(|(k, _)| k.clone())
            .collect();
        if !keys.is_empty() {
            tracing::debug!("Focus regained: revalidating {} queries", keys.len());
        }
        for key in keys {
            self.spawn_fetch(key);
        }
    }

    /// Drain finished fetches. Returns how many results were applied.
    ///
    /// Called once per frame. Non-blocking.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.rx.try_recv() {
            let Some(entry) = self.entries.get_mut(&msg.key) else {
                continue;
            };
            if entry.pending != Some(msg.generation) {
                tracing::trace!("Dropping stale result for {:?}", msg.key);
                continue;
            }
            entry.pending = None;
            match msg.outcome {
                Ok(data) => {
                    entry.data = Some(data);
                    entry.error = None;
                    if self.last_error.as_ref().is_some_and(|(k, _)| *k == msg.key) {
                        self.last_error = None;
                    }
                }
                Err(error) => {
                    tracing::warn!("Query {:?} failed: {}", msg.key, error);
                    entry.error = Some(error.clone());
                    self.last_error = Some((msg.key, error));
                }
            }
            applied += 1;
        }
        applied
    }

    /// Block until nothing is in flight or `timeout` elapses. Returns
    /// `true` if the cache settled.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.poll();
            if self.in_flight_count() == 0 {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            std::thread::sleep((deadline - now).min(Duration::from_millis(5)));
        }
    }

    /// Replace the data of `key`, creating the entry if needed. A pending
    /// fetch for the key is superseded.
    pub fn insert(&mut self, key: QueryKey, data: QueryData) {
        if !self.entries.contains_key(&key) {
            self.evict_if_full();
        }
        self.use_counter += 1;
        let stamp = self.use_counter;
        let entry = self.entries.entry(key).or_insert_with(|| QueryEntry {
            data: None,
            error: None,
            pending: None,
            revalidate_on_focus: true,
            last_used: stamp,
        });
        entry.data = Some(data);
        entry.error = None;
        entry.pending = None;
        entry.last_used = stamp;
    }

    /// Patch cached data in place for every key matching `filter`.
    /// Returns the number of entries touched.
    pub fn mutate<F, M>(&mut self, filter: F, mut patch: M) -> usize
    where
        F: Fn(&QueryKey) -> bool,
        M: FnMut(&mut QueryData),
    {
        let mut touched = 0;
        for (key, entry) in self.entries.iter_mut() {
            if !filter(key) {
                continue;
            }
            if let Some(data) = entry.data.as_mut() {
                patch(data);
                touched += 1;
            }
        }
        touched
    }

    /// Apply `patch` to every cached copy of the event `event_id`.
    pub fn mutate_event<M>(&mut self, event_id: &str, mut patch: M) -> usize
    where
        M: FnMut(&mut Event),
    {
        let mut patched = 0;
        self.mutate(
            |key| matches!(key, QueryKey::EventIds { .. }),
            |data| {
                if let QueryData::Events(events) = data {
                    for event in events.iter_mut().filter(|e| e.id == event_id) {
                        patch(event);
                        patched += 1;
                    }
                }
            },
        );
        patched
    }

    pub fn status(&self, key: &QueryKey) -> QueryStatus {
        match self.entries.get(key) {
            None => QueryStatus::Idle,
            Some(e) if e.data.is_some() => QueryStatus::Ready,
            Some(e) if e.pending.is_some() => QueryStatus::Loading,
            Some(e) if e.error.is_some() => QueryStatus::Failed,
            Some(_) => QueryStatus::Idle,
        }
    }

    pub fn error(&self, key: &QueryKey) -> Option<&str> {
        self.entries.get(key)?.error.as_deref()
    }

    /// Image URLs evicted since the last call. Owners of per-image
    /// resources (textures) release them here.
    pub fn take_evicted_images(&mut self) -> Vec<String> {
        std::mem::take(&mut self.evicted_images)
    }

    /// Most recent failure across all keys. Cleared once that key
    /// succeeds.
    pub fn last_error(&self) -> Option<&(QueryKey, String)> {
        self.last_error.as_ref()
    }

    pub fn in_flight_count(&self) -> usize {
        self.entries.values().filter(|e| e.pending.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn data(&self, key: &QueryKey) -> Option<&QueryData> {
        self.entries.get(key)?.data.as_ref()
    }

    pub fn config(&self) -> Option<&FrigateConfig> {
        match self.data(&QueryKey::Config)? {
            QueryData::Config(config) => Some(config),
            _ => None,
        }
    }

    pub fn events(&self, key: &QueryKey) -> Option<&[Event]> {
        match self.data(key)? {
            QueryData::Events(events) => Some(events),
            _ => None,
        }
    }

    pub fn reviews(&self, key: &QueryKey) -> Option<&[ReviewSegment]> {
        match self.data(key)? {
            QueryData::Reviews(reviews) => Some(reviews),
            _ => None,
        }
    }

    pub fn timeline(&self, key: &QueryKey) -> Option<&[TimelineEntry]> {
        match self.data(key)? {
            QueryData::Timeline(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn image(&self, key: &QueryKey) -> Option<&Arc<DecodedImage>> {
        match self.data(key)? {
            QueryData::Image(image) => Some(image),
            _ => None,
        }
    }

    /// Start a worker for `key` and mark the entry as waiting for it.
    fn spawn_fetch(&mut self, key: QueryKey) {
        let generation = self.next_generation;
        self.next_generation += 1;
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.pending = Some(generation);
        }

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let worker_key = key.clone();
        let spawned = std::thread::Builder::new()
            .name("query-worker".into())
            .spawn(move || {
                let outcome = run_query(api.as_ref(), &worker_key).map_err(|e| e.to_string());
                let _ = tx.send(QueryResult {
                    key: worker_key,
                    generation,
                    outcome,
                });
            });

        if let Err(e) = spawned {
            tracing::error!("Failed to spawn query worker for {:?}: {}", key, e);
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.pending = None;
                entry.error = Some(e.to_string());
            }
        }
    }

    /// Drop least-recently-used entries until there is room for one more.
    /// The config entry is never evicted; an evicted entry with a fetch in
    /// flight simply ignores the late result.
    fn evict_if_full(&mut self) {
        while self.entries.len() >= MAX_CACHE_ENTRIES {
            let victim = self
                .entries
                .iter()
                .filter(|(k, _)| **k != QueryKey::Config)
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone());
            let Some(key) = victim else {
                break;
            };
            self.entries.remove(&key);
            tracing::trace!("Evicted {:?}", key);
            if let QueryKey::Image { url } = key {
                self.evicted_images.push(url);
            }
        }
    }
}

/// Perform the read for `key`. Runs on a worker thread.
fn run_query(api: &dyn FrigateApi, key: &QueryKey) -> Result<QueryData> {
    let data = match key {
        QueryKey::Config => QueryData::Config(api.config()?),
        QueryKey::EventIds { ids } => QueryData::Events(api.events_by_ids(ids)?),
        QueryKey::Reviews { limit } => QueryData::Reviews(api.reviews(*limit)?),
        QueryKey::Timeline { source_id } => QueryData::Timeline(api.timeline(source_id)?),
        QueryKey::Image { url } => {
            let bytes = api.fetch_bytes(url)?;
            QueryData::Image(Arc::new(decode_image(&bytes)?))
        }
    };
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::ApiHost;
    use crate::util::error::{status_err, FrigateReviewError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory server that counts calls and can hold responses back.
    struct FakeApi {
        host: ApiHost,
        event_calls: AtomicUsize,
        config_calls: AtomicUsize,
        review_calls: AtomicUsize,
        gate: Mutex<()>,
    }

    impl FakeApi {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                host: ApiHost::parse("http://fake").unwrap(),
                event_calls: AtomicUsize::new(0),
                config_calls: AtomicUsize::new(0),
                review_calls: AtomicUsize::new(0),
                gate: Mutex::new(()),
            })
        }
    }

    impl FrigateApi for FakeApi {
        fn host(&self) -> &ApiHost {
            &self.host
        }
        fn config(&self) -> Result<FrigateConfig> {
            self.config_calls.fetch_add(1, Ordering::SeqCst);
            Ok(FrigateConfig::default())
        }
        fn events_by_ids(&self, ids: &str) -> Result<Vec<Event>> {
            let _held = self.gate.lock().unwrap();
            self.event_calls.fetch_add(1, Ordering::SeqCst);
            Ok(ids
                .split(',')
                .filter(|id| !id.is_empty())
                .map(|id| {
                    serde_json::from_value(serde_json::json!({"id": id, "label": "person"}))
                        .unwrap()
                })
                .collect())
        }
        /// The first call fails, later calls succeed.
        fn reviews(&self, _limit: usize) -> Result<Vec<ReviewSegment>> {
            if self.review_calls.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(status_err(500, "http://fake/api/review"));
            }
            Ok(Vec::new())
        }
        fn timeline(&self, _source_id: &str) -> Result<Vec<TimelineEntry>> {
            Ok(Vec::new())
        }
        fn fetch_bytes(&self, _url: &str) -> Result<Vec<u8>> {
            Err(FrigateReviewError::Download("offline".into()))
        }
        fn submit_to_plus(&self, _event_id: &str) -> Result<Option<String>> {
            Ok(None)
        }
    }

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn test_request_fetches_once() {
        let api = FakeApi::new();
        let mut cache = QueryCache::new(api.clone());
        let key = QueryKey::event_ids("a,b");

        cache.request(&key, QueryOptions::default());
        cache.request(&key, QueryOptions::default());
        assert!(cache.settle(WAIT));
        cache.request(&key, QueryOptions::default());

        assert_eq!(api.event_calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.events(&key).map(|e| e.len()), Some(2));
        assert_eq!(cache.status(&key), QueryStatus::Ready);
    }

    #[test]
    fn test_disabled_request_never_fetches() {
        let api = FakeApi::new();
        let mut cache = QueryCache::new(api.clone());
        let key = QueryKey::event_ids("a");

        cache.request(&key, QueryOptions::enabled_if(false));
        assert!(cache.settle(WAIT));

        assert_eq!(api.event_calls.load(Ordering::SeqCst), 0);
        assert_eq!(cache.status(&key), QueryStatus::Idle);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_failure_is_recorded() {
        let api = FakeApi::new();
        let mut cache = QueryCache::new(api);
        let key = QueryKey::Reviews { limit: 10 };

        cache.request(&key, QueryOptions::default());
        assert!(cache.settle(WAIT));

        assert_eq!(cache.status(&key), QueryStatus::Failed);
        assert!(cache.reviews(&key).is_none());
        assert!(cache.error(&key).is_some_and(|e| e.contains("500")));
        assert_eq!(cache.last_error().map(|(k, _)| k), Some(&key));
    }

    #[test]
    fn test_focus_revalidation_respects_options() {
        let api = FakeApi::new();
        let mut cache = QueryCache::new(api.clone());
        let events = QueryKey::event_ids("a");

        cache.request(
            &QueryKey::Config,
            QueryOptions::default().without_focus_revalidation(),
        );
        cache.request(&events, QueryOptions::default());
        assert!(cache.settle(WAIT));

        cache.set_focused(false);
        cache.set_focused(true);
        assert!(cache.settle(WAIT));

        assert_eq!(api.config_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.event_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_stale_result_is_dropped_after_insert() {
        let api = FakeApi::new();
        let mut cache = QueryCache::new(api.clone());
        let key = QueryKey::event_ids("a,b,c");

        let held = api.gate.lock().unwrap();
        cache.request(&key, QueryOptions::default());
        cache.insert(key.clone(), QueryData::Events(Vec::new()));
        drop(held);

        // The worker still reports, but the entry no longer expects it.
        std::thread::sleep(Duration::from_millis(50));
        cache.poll();
        assert_eq!(cache.events(&key).map(|e| e.len()), Some(0));
    }

    #[test]
    fn test_mutate_event_patches_every_list() {
        let api = FakeApi::new();
        let mut cache = QueryCache::new(api);
        let first = QueryKey::event_ids("a,b");
        let second = QueryKey::event_ids("a");
        cache.request(&first, QueryOptions::default());
        cache.request(&second, QueryOptions::default());
        assert!(cache.settle(WAIT));

        let patched = cache.mutate_event("a", |e| e.plus_id = Some("new_upload".into()));

        assert_eq!(patched, 2);
        for key in [&first, &second] {
            let a = cache.events(key).unwrap().iter().find(|e| e.id == "a").unwrap();
            assert_eq!(a.plus_id.as_deref(), Some("new_upload"));
        }
        let b = cache.events(&first).unwrap().iter().find(|e| e.id == "b").unwrap();
        assert!(b.plus_id.is_none());
    }

    #[test]
    fn test_set_api_clears_entries() {
        let mut cache = QueryCache::new(FakeApi::new());
        cache.insert(QueryKey::Config, QueryData::Config(FrigateConfig::default()));
        assert!(cache.config().is_some());

        cache.set_api(FakeApi::new());
        assert!(cache.config().is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_image_failure_does_not_panic() {
        let mut cache = QueryCache::new(FakeApi::new());
        let key = QueryKey::image("http://fake/api/events/a/snapshot.jpg");
        cache.request(&key, QueryOptions::default());
        assert!(cache.settle(WAIT));
        assert!(cache.image(&key).is_none());
        assert_eq!(cache.status(&key), QueryStatus::Failed);
    }

    #[test]
    fn test_last_error_clears_when_key_recovers() {
        let mut cache = QueryCache::new(FakeApi::new());
        let reviews = QueryKey::Reviews { limit: 10 };

        cache.request(&reviews, QueryOptions::default());
        assert!(cache.settle(WAIT));
        assert!(cache.last_error().is_some());

        cache.invalidate(&reviews);
        assert!(cache.settle(WAIT));

        assert_eq!(cache.status(&reviews), QueryStatus::Ready);
        assert!(cache.error(&reviews).is_none());
        assert!(cache.last_error().is_none());
    }

    #[test]
    fn test_last_error_of_other_key_survives_success() {
        let mut cache = QueryCache::new(FakeApi::new());
        let image = QueryKey::image("http://fake/api/events/a/thumbnail.jpg");
        let events = QueryKey::event_ids("a");

        cache.request(&image, QueryOptions::default());
        assert!(cache.settle(WAIT));
        cache.request(&events, QueryOptions::default());
        assert!(cache.settle(WAIT));

        assert_eq!(cache.last_error().map(|(k, _)| k), Some(&image));
    }

    fn pixel() -> QueryData {
        QueryData::Image(Arc::new(DecodedImage {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 255],
        }))
    }

    #[test]
    fn test_eviction_caps_entries_and_keeps_config() {
        let mut cache = QueryCache::new(FakeApi::new());
        cache.insert(QueryKey::Config, QueryData::Config(FrigateConfig::default()));
        cache.insert(QueryKey::timeline("old"), QueryData::Timeline(Vec::new()));
        for i in 0..MAX_CACHE_ENTRIES {
            cache.insert(QueryKey::image(format!("http://fake/{i}.jpg")), pixel());
        }
        cache.insert(QueryKey::event_ids("latest"), QueryData::Events(Vec::new()));

        assert_eq!(cache.len(), MAX_CACHE_ENTRIES);
        assert!(cache.config().is_some(), "Config is never evicted");
        assert!(
            cache.timeline(&QueryKey::timeline("old")).is_none(),
            "Oldest non-config entry goes first"
        );
        assert!(cache.events(&QueryKey::event_ids("latest")).is_some());
        let newest_image = QueryKey::image(format!("http://fake/{}.jpg", MAX_CACHE_ENTRIES - 1));
        assert!(cache.image(&newest_image).is_some());

        let evicted = cache.take_evicted_images();
        assert_eq!(
            evicted,
            vec!["http://fake/0.jpg".to_owned(), "http://fake/1.jpg".to_owned()]
        );
        assert!(cache.take_evicted_images().is_empty());
    }

    #[test]
    fn test_recently_used_entry_survives_eviction() {
        let mut cache = QueryCache::new(FakeApi::new());
        let kept = QueryKey::image("http://fake/kept.jpg");
        cache.insert(kept.clone(), pixel());
        for i in 0..MAX_CACHE_ENTRIES - 1 {
            cache.insert(QueryKey::image(format!("http://fake/{i}.jpg")), pixel());
        }

        // Touch the oldest entry; a request on a cached key never fetches.
        cache.request(&kept, QueryOptions::default());
        cache.insert(QueryKey::image("http://fake/new.jpg"), pixel());

        assert!(cache.image(&kept).is_some());
        assert_eq!(cache.take_evicted_images(), vec!["http://fake/0.jpg".to_owned()]);
    }
}
