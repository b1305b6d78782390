//! Core domain modules for FrigateReview.
//!
//! Contains the Frigate data model, the HTTP client, the shared query
//! cache, and the rendering-independent state of the review overlay.

pub mod api;
pub mod config;
pub mod device;
pub mod event;
pub mod event_item;
pub mod lifecycle;
pub mod media;
pub mod query;
pub mod review_dialog;
pub mod review_segment;
