//! Per-call event handed to the remote encoders

use super::caller::CallerContext;
use super::level::Level;
use chrono::Utc;

/// Fixed offset added to every forwarded timestamp (nine hours).
///
/// The downstream columnar consumer expects this shifted clock; changing it
/// breaks wire compatibility.
pub const TIMESTAMP_OFFSET_SECS: i64 = 9 * 60 * 60;

/// Shifted Unix seconds for "now"
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp() + TIMESTAMP_OFFSET_SECS
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub level: Level,
    pub message: String,
    pub caller: String,
    pub timestamp: i64,
}

impl LogEvent {
    pub fn new(level: Level, message: String, caller: Option<&CallerContext>) -> Self {
        Self {
            level,
            message,
            caller: caller.map(ToString::to_string).unwrap_or_default(),
            timestamp: current_timestamp(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }
}
