//! Logging macros routed through the process-wide logger.
//!
//! Plain macros take any number of `Display` values, concatenate them with no
//! separator and capture the call site including the module path. The `f`
//! macros take a format string like `format!` and capture no call site.
//!
//! # Examples
//!
//! ```
//! use rust_fanout_logger::{info, infof};
//!
//! let port = 8080;
//! info!("listening on :", port);
//! infof!("listening on :{}", port);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log_plain {
    ($level:expr, $($arg:expr),+ $(,)?) => {
        $crate::registry::log(
            $level,
            $crate::core::concat(&[$(&$arg as &dyn ::std::fmt::Display),+]),
            ::std::option::Option::Some($crate::caller!()),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_formatted {
    ($level:expr, $($arg:tt)+) => {
        $crate::registry::log($level, ::std::format!($($arg)+), ::std::option::Option::None)
    };
}

/// Log a debug-level message.
///
/// ```
/// use rust_fanout_logger::debug;
/// debug!("cache size ", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:expr),+ $(,)?) => {
        $crate::__log_plain!($crate::Level::Debug, $($arg),+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($($arg:expr),+ $(,)?) => {
        $crate::__log_plain!($crate::Level::Info, $($arg),+)
    };
}

/// Log an error-level message and page the chat channel.
///
/// ```
/// use rust_fanout_logger::error;
/// error!("payment declined: ", "card expired");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:expr),+ $(,)?) => {
        $crate::__log_plain!($crate::Level::Error, $($arg),+)
    };
}

/// Log a fatal-level message, then exit the process.
#[macro_export]
macro_rules! fatal {
    ($($arg:expr),+ $(,)?) => {
        $crate::__log_plain!($crate::Level::Fatal, $($arg),+)
    };
}

/// Log a panic-level message, then panic.
#[macro_export]
macro_rules! panic_log {
    ($($arg:expr),+ $(,)?) => {
        $crate::__log_plain!($crate::Level::Panic, $($arg),+)
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::__log_formatted!($crate::Level::Debug, $($arg)+)
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::__log_formatted!($crate::Level::Info, $($arg)+)
    };
}

/// Alias of [`infof!`].
#[macro_export]
macro_rules! printf {
    ($($arg:tt)+) => {
        $crate::__log_formatted!($crate::Level::Info, $($arg)+)
    };
}

/// Log a formatted error-level message and page the chat channel.
///
/// ```
/// use rust_fanout_logger::errorf;
/// errorf!("Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::__log_formatted!($crate::Level::Error, $($arg)+)
    };
}

/// Log a formatted fatal-level message, then exit the process.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::__log_formatted!($crate::Level::Fatal, $($arg)+)
    };
}

/// Log a formatted panic-level message, then panic.
#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::__log_formatted!($crate::Level::Panic, $($arg)+)
    };
}
