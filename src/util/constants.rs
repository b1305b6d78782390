//! Application-wide constants for FrigateReview.
//!
//! Centralising magic numbers and configuration defaults here keeps the rest
//! of the codebase clean and makes tuning straightforward.

/// Application display name used in titles, dialogs, etc.
pub const APP_NAME: &str = "FrigateReview";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server used on first launch when neither storage nor the environment
/// provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/";

/// Environment variable that overrides the initial server URL.
pub const API_URL_ENV_VAR: &str = "FRIGATE_URL";

/// Number of review segments requested for the review list.
pub const REVIEW_LIST_LIMIT: usize = 100;

/// Timeout applied to every HTTP request.
pub const HTTP_TIMEOUT_SECS: u64 = 15;

/// Size of the channel used by query workers to report results to the UI.
/// Bounded so a flood of image fetches applies back-pressure.
pub const QUERY_CHANNEL_BOUND: usize = 64;

/// Upper bound on cached query entries. The least recently used entry
/// other than the server config is evicted when the cap is reached.
pub const MAX_CACHE_ENTRIES: usize = 512;

/// Value written into `plus_id` after a successful Frigate+ submission,
/// until the event list is refetched.
pub const NEW_UPLOAD_SENTINEL: &str = "new_upload";

/// Window width (logical pixels) below which the automatic device profile
/// switches to the mobile form factor.
pub const MOBILE_BREAKPOINT_PX: f32 = 640.0;

/// Side sheet width while the overview pane is shown.
pub const SHEET_WIDTH_OVERVIEW: f32 = 576.0;

/// Side sheet width while the details pane is shown.
pub const SHEET_WIDTH_DETAILS: f32 = 896.0;

/// Maximum share of the screen height taken by the bottom drawer.
pub const DRAWER_MAX_HEIGHT_FRACTION: f32 = 0.8;

/// Row height in the review table (in logical pixels).
pub const TABLE_ROW_HEIGHT: f32 = 26.0;

/// How long transient status messages (downloads, uploads) stay visible.
pub const STATUS_MESSAGE_SECS: u64 = 4;

/// Application data subdirectory name for logs.
pub const APP_DATA_DIR: &str = "FrigateReview";

/// Log subdirectory name under the app data directory.
pub const LOG_DIR: &str = "logs";

/// Log file name for persistent error/debug logging.
pub const LOG_FILE_NAME: &str = "frigate-review.log";

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;
