//! FrigateReview: a native viewer for Frigate NVR review items.
//!
//! Entry point: initialises structured logging and launches the eframe
//! application window.

// Hide the console window in release builds on Windows.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod app_actions;
mod app_update;
mod ui;

use std::path::PathBuf;

use tracing_subscriber::Layer as _;

use app::ReviewApp;
use frigate_review::util::constants;

fn main() -> eframe::Result<()> {
    // ── Persistent file logging ─────────────────────────────────────
    // Dual-layer logging: stderr (env-controlled) + file (always debug).
    let log_dir = init_log_dir();
    init_logging(&log_dir);

    tracing::info!("{} v{} starting", constants::APP_NAME, constants::APP_VERSION);
    if let Some(dir) = &log_dir {
        tracing::info!("Log file: {}", dir.join(constants::LOG_FILE_NAME).display());
    }

    // ── Pre-init ────────────────────────────────────────────────────
    // Resolve the server and build the HTTP client before the window
    // opens so the creator closure is trivial.
    let pre_init = match app::PreInitState::build() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };
    tracing::info!("Frigate server: {}", pre_init.host.as_str());

    let viewport = egui::ViewportBuilder::default()
        .with_title(format!("{} v{}", constants::APP_NAME, constants::APP_VERSION))
        .with_inner_size([1280.0, 800.0])
        .with_min_inner_size([360.0, 480.0]);

    let options = eframe::NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(ReviewApp::from_pre_init(cc, pre_init)))),
    )
}

/// Platform data directory: `%LOCALAPPDATA%` on Windows, otherwise
/// `$XDG_DATA_HOME` or `~/.local/share`.
fn data_home() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("LOCALAPPDATA") {
        return Some(PathBuf::from(dir));
    }
    if let Ok(dir) = std::env::var("XDG_DATA_HOME") {
        return Some(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".local").join("share"))
}

/// Create the persistent log directory.
///
/// Returns `None` if the directory cannot be created (logging falls back
/// to stderr only).
fn init_log_dir() -> Option<PathBuf> {
    let log_dir = data_home()?
        .join(constants::APP_DATA_DIR)
        .join(constants::LOG_DIR);
    std::fs::create_dir_all(&log_dir).ok()?;

    // Rotate the log file if it exceeds the size limit.
    let log_file = log_dir.join(constants::LOG_FILE_NAME);
    if let Ok(meta) = std::fs::metadata(&log_file) {
        if meta.len() > constants::MAX_LOG_FILE_SIZE {
            let backup = log_dir.join(format!("{}.old", constants::LOG_FILE_NAME));
            let _ = std::fs::rename(&log_file, &backup);
        }
    }

    Some(log_dir)
}

/// Initialise the dual-layer tracing subscriber.
///
/// - **stderr layer**: filtered by `RUST_LOG` (default: `info`).
/// - **file layer** (if `log_dir` is `Some`): always writes at `debug`.
fn init_logging(log_dir: &Option<PathBuf>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(dir) = log_dir {
        let log_path = dir.join(constants::LOG_FILE_NAME);
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .with_filter(tracing_subscriber::EnvFilter::new("debug"));

            tracing_subscriber::registry()
                .with(stderr_layer.with_filter(env_filter))
                .with(file_layer)
                .init();
            return;
        }
    }

    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}
