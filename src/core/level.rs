//! Log level definitions and per-level routing

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Debug = 0,
    #[default]
    Info = 1,
    Error = 2,
    Fatal = 3,
    Panic = 4,
}

/// Which remote sinks an event of a given level is forwarded to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub columnar: bool,
    pub chat: bool,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
        }
    }

    /// Render any numeric level code
    ///
    /// Codes `0..=4` yield the canonical name, anything else its decimal form.
    ///
    /// ```
    /// use rust_fanout_logger::Level;
    ///
    /// assert_eq!(Level::describe(2), "ERROR");
    /// assert_eq!(Level::describe(-1), "-1");
    /// assert_eq!(Level::describe(42), "42");
    /// ```
    pub fn describe(code: i32) -> Cow<'static, str> {
        match Level::try_from(code) {
            Ok(level) => Cow::Borrowed(level.to_str()),
            Err(code) => Cow::Owned(code.to_string()),
        }
    }

    /// Remote sinks this level is forwarded to.
    ///
    /// Every level reaches the columnar store; only ERROR and FATAL page the
    /// chat channel.
    pub fn route(&self) -> Route {
        match self {
            Level::Debug | Level::Info | Level::Panic => Route {
                columnar: true,
                chat: false,
            },
            Level::Error | Level::Fatal => Route {
                columnar: true,
                chat: true,
            },
        }
    }

    /// FATAL and PANIC end the calling flow after the local write
    pub fn is_terminal(&self) -> bool {
        matches!(self, Level::Fatal | Level::Panic)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Error => Red,
            Level::Fatal => BrightRed,
            Level::Panic => Magenta,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl TryFrom<i32> for Level {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, i32> {
        match code {
            0 => Ok(Level::Debug),
            1 => Ok(Level::Info),
            2 => Ok(Level::Error),
            3 => Ok(Level::Fatal),
            4 => Ok(Level::Panic),
            other => Err(other),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            "PANIC" => Ok(Level::Panic),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
