//! Utility functions module
//!
//! Contains helpers for human-readable duration parsing and formatting.

pub mod duration;

// Re-export commonly used functions
pub use duration::{format_duration, parse_duration};
