//! Console backend implementation

use crate::core::{Backend, Level};
#[cfg(feature = "console")]
use colored::Colorize;
use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Line layout for console output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
    #[default]
    Text,
    Json,
}

/// Writes log lines to stdout, ERROR and above to stderr
///
/// The minimum level only filters local output; remote forwarding happens
/// in the facade before the backend is consulted.
pub struct ConsoleBackend {
    use_colors: bool,
    format: ConsoleFormat,
    min_level: RwLock<Level>,
}

impl ConsoleBackend {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            format: ConsoleFormat::default(),
            min_level: RwLock::new(Level::Info),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the output format for this backend
    ///
    /// # Example
    ///
    /// ```
    /// use rust_fanout_logger::backends::{ConsoleBackend, ConsoleFormat};
    ///
    /// let backend = ConsoleBackend::new().with_format(ConsoleFormat::Json);
    /// ```
    #[must_use]
    pub fn with_format(mut self, format: ConsoleFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_min_level(self, level: Level) -> Self {
        self.set_min_level(level);
        self
    }

    pub fn set_min_level(&self, level: Level) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> Level {
        *self.min_level.read()
    }

    /// Escape line breaks and tabs so one call stays one line
    fn sanitize(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn thread_label() -> String {
        let thread = std::thread::current();
        match thread.name() {
            Some(name) => name.to_string(),
            None => format!("{:?}", thread.id()),
        }
    }

    fn format_line(&self, level: Level, message: &str, timestamp: DateTime<Utc>) -> String {
        let timestamp = timestamp.to_rfc3339_opts(SecondsFormat::Millis, true);
        let message = Self::sanitize(message);
        let thread = Self::thread_label();

        match self.format {
            ConsoleFormat::Json => serde_json::json!({
                "timestamp": timestamp,
                "level": level,
                "thread": thread,
                "message": message,
            })
            .to_string(),
            ConsoleFormat::Text => format!(
                "[{}] [{}] {} - {}",
                timestamp,
                self.level_tag(level),
                thread,
                message
            ),
        }
    }

    #[cfg(feature = "console")]
    fn level_tag(&self, level: Level) -> String {
        if self.use_colors {
            format!("{:5}", level).color(level.color_code()).to_string()
        } else {
            format!("{:5}", level)
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_tag(&self, level: Level) -> String {
        format!("{:5}", level)
    }
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for ConsoleBackend {
    fn write(&self, level: Level, message: &str) {
        if level < self.min_level() {
            return;
        }

        let line = self.format_line(level, message, Utc::now());
        if level >= Level::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}
