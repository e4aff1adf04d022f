//! Core logger types and traits

pub mod backend;
pub mod caller;
pub mod config;
pub mod dispatcher;
pub mod encode;
pub mod error;
pub mod event;
pub mod level;
pub mod logger;
pub mod sink;

pub use backend::Backend;
pub use caller::CallerContext;
pub use config::{DispatchConfig, DEFAULT_REQUEST_TIMEOUT};
pub use dispatcher::Dispatcher;
pub use error::{LoggerError, Result};
pub use event::{LogEvent, TIMESTAMP_OFFSET_SECS};
pub use level::{Level, Route};
pub use logger::{concat, FanoutLogger, FanoutLoggerBuilder, Logger, LoggerExt};
pub use sink::Sink;
