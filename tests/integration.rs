//! Integration tests for FrigateReview.
//!
//! These tests drive the library through its public API only. Server
//! access goes through an in-memory `FrigateApi`, so no Frigate instance
//! or display is needed.

mod error_types;
