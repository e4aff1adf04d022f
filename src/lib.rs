//! # Rust Fanout Logger
//!
//! A logging facade that writes every call to a local backend and forwards a
//! copy of it to remote observability sinks without blocking the caller.
//!
//! ## Features
//!
//! - **Fire-and-forget fan-out**: every forwarded event ships on its own
//!   detached thread; sink failures end up as a local log line, never as an
//!   error for the caller
//! - **Two remote sinks**: a columnar log store (row tuples over HTTP POST)
//!   and a chat webhook for ERROR and FATAL alerts
//! - **Call-site capture**: plain log calls carry the file, line and module
//!   they were issued from
//! - **Swappable**: one process-wide logger, replaceable at startup
//!
//! ## Example
//!
//! ```no_run
//! use rust_fanout_logger::{error, infof, DispatchConfig};
//!
//! rust_fanout_logger::init(DispatchConfig::new(
//!     "https://chat.example/hook?",
//!     "orders",
//!     "https://ch.example/insert",
//!     "prod",
//! ))
//! .expect("HTTP client");
//!
//! infof!("processed {} orders", 12);
//! error!("bad", "-input");
//! ```

pub mod backends;
pub mod core;
pub mod macros;
pub mod registry;
pub mod sinks;

pub mod prelude {
    pub use crate::backends::{ConsoleBackend, ConsoleFormat};
    pub use crate::core::{
        Backend, CallerContext, DispatchConfig, Dispatcher, FanoutLogger, FanoutLoggerBuilder,
        Level, LogEvent, Logger, LoggerError, LoggerExt, Result, Sink,
    };
    pub use crate::sinks::{ChannelSink, ChatSink, ColumnarSink};
}

pub use crate::backends::{ConsoleBackend, ConsoleFormat};
pub use crate::core::{
    Backend, CallerContext, DispatchConfig, Dispatcher, FanoutLogger, FanoutLoggerBuilder, Level,
    LogEvent, Logger, LoggerError, LoggerExt, Result, Route, Sink, DEFAULT_REQUEST_TIMEOUT,
    TIMESTAMP_OFFSET_SECS,
};
pub use crate::registry::{
    debug, debugf, error, errorf, fatal, fatalf, info, infof, init, logger, panic, panicf, printf,
    set_logger,
};
