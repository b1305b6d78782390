//! Shared helpers: constants, error types, text and time formatting.

pub mod constants;
pub mod error;
pub mod text;
pub mod time;
