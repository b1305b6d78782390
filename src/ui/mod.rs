//! UI sub-modules for FrigateReview.
//!
//! Each sub-module adds rendering methods to [`crate::app::ReviewApp`]
//! via `impl` blocks, keeping UI code separated from state management.

pub mod event_item;
pub mod object_lifecycle;
pub mod plus_dialog;
pub mod review_detail;
pub mod review_list;
pub mod status_bar;
pub mod textures;
pub mod theme;
pub mod toolbar;
