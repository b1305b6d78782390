//! FrigateReview library crate.
//!
//! Holds everything that does not draw pixels: the Frigate data model, the
//! HTTP client, the query cache, and the review overlay state. The egui
//! binary in `main.rs` renders on top of it, and integration tests drive
//! it headlessly.

pub mod core;
pub mod util;
