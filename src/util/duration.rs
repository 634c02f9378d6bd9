//! Human-readable durations
//!
//! Durations in the config file and on the command line are written the
//! way people type them (`500ms`, `1s`), parsed with `humantime`.

use std::time::Duration;

/// Parse a human-readable duration string
///
/// # Examples
/// ```
/// use quizwiz::util::duration::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
/// assert_eq!(parse_duration("1s 250ms").unwrap(), Duration::from_millis(1250));
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    humantime::parse_duration(input.trim())
        .map_err(|e| format!("Invalid duration '{}': {}", input.trim(), e))
}

/// Format a duration for display and for the config file
///
/// # Examples
/// ```
/// use quizwiz::util::duration::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
/// ```
pub fn format_duration(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}

/// Serde adapter storing a `Duration` as a humantime string
pub mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_duration(*duration))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_duration(&raw).map_err(serde::de::Error::custom)
    }
}
