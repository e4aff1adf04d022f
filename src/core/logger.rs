//! Logger facade: local write plus remote fan-out

use super::{
    backend::Backend,
    caller::CallerContext,
    config::DispatchConfig,
    dispatcher::Dispatcher,
    error::{LoggerError, Result},
    event::LogEvent,
    level::Level,
    sink::Sink,
};
use crate::backends::ConsoleBackend;
use std::fmt::{self, Write};
use std::sync::Arc;

/// The logging capability installed in the registry
///
/// `caller` is `Some` for the plain entry points and `None` for the
/// formatted ones.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: String, caller: Option<CallerContext>);
}

/// Per-level entry points available on every [`Logger`]
///
/// Plain variants concatenate the `Display` form of each argument with no
/// separator and capture the call site. Formatted variants take
/// `format_args!` output and capture nothing.
///
/// # Example
///
/// ```
/// use rust_fanout_logger::prelude::*;
///
/// let logger = FanoutLogger::default();
/// logger.info(&[&"cache warmed in ", &12, &"ms"]);
/// logger.infof(format_args!("{} entries", 4096));
/// ```
pub trait LoggerExt: Logger {
    #[track_caller]
    fn debug(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Debug, concat(args), Some(CallerContext::capture()));
    }

    #[track_caller]
    fn info(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Info, concat(args), Some(CallerContext::capture()));
    }

    #[track_caller]
    fn error(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Error, concat(args), Some(CallerContext::capture()));
    }

    /// Dispatches remotely, writes locally, then ends the process
    #[track_caller]
    fn fatal(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Fatal, concat(args), Some(CallerContext::capture()));
    }

    /// Dispatches remotely, writes locally, then panics
    #[track_caller]
    fn panic(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Panic, concat(args), Some(CallerContext::capture()));
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, fmt::format(args), None);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, fmt::format(args), None);
    }

    /// Same as [`LoggerExt::infof`]
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.infof(args);
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, fmt::format(args), None);
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Fatal, fmt::format(args), None);
    }

    fn panicf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Panic, fmt::format(args), None);
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}

/// Concatenate display forms with no separator
pub fn concat(args: &[&dyn fmt::Display]) -> String {
    let mut message = String::new();
    for arg in args {
        let _ = write!(message, "{}", arg);
    }
    message
}

/// Writes every call to the local backend and forwards it to the remote
/// sinks its level routes to
///
/// Without a dispatcher the facade is local-only.
pub struct FanoutLogger {
    backend: Arc<dyn Backend>,
    dispatcher: Option<Dispatcher>,
}

impl FanoutLogger {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            dispatcher: None,
        }
    }

    #[must_use]
    pub fn with_dispatcher(backend: Arc<dyn Backend>, dispatcher: Dispatcher) -> Self {
        Self {
            backend,
            dispatcher: Some(dispatcher),
        }
    }

    #[must_use]
    pub fn builder() -> FanoutLoggerBuilder {
        FanoutLoggerBuilder::new()
    }

    pub fn dispatcher(&self) -> Option<&Dispatcher> {
        self.dispatcher.as_ref()
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }
}

impl Logger for FanoutLogger {
    fn log(&self, level: Level, message: String, caller: Option<CallerContext>) {
        let event = LogEvent::new(level, message, caller.as_ref());

        // Spawn remote units first so FATAL and PANIC still get a chance to ship
        if let Some(ref dispatcher) = self.dispatcher {
            dispatcher.dispatch(&event);
        }

        self.backend.write(level, &event.message);

        if level.is_terminal() {
            self.backend.terminate(level, &event.message);
        }
    }
}

impl Default for FanoutLogger {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleBackend::new()))
    }
}

/// Builder for constructing a [`FanoutLogger`]
///
/// # Example
/// ```
/// use rust_fanout_logger::prelude::*;
/// use rust_fanout_logger::sinks::ChannelSink;
/// use std::sync::Arc;
///
/// let (columnar, _rows) = ChannelSink::unbounded("columnar");
/// let (chat, _alerts) = ChannelSink::unbounded("chat");
///
/// let logger = FanoutLogger::builder()
///     .backend(ConsoleBackend::new().with_min_level(Level::Debug))
///     .config(DispatchConfig::new("https://chat.example/hook?", "orders", "https://ch.example/insert", "prod"))
///     .sinks(Arc::new(columnar), Arc::new(chat))
///     .build()
///     .unwrap();
/// assert!(logger.dispatcher().is_some());
/// ```
pub struct FanoutLoggerBuilder {
    backend: Option<Arc<dyn Backend>>,
    config: Option<DispatchConfig>,
    sinks: Option<(Arc<dyn Sink>, Arc<dyn Sink>)>,
}

impl FanoutLoggerBuilder {
    pub fn new() -> Self {
        Self {
            backend: None,
            config: None,
            sinks: None,
        }
    }

    /// Set the local backend (console by default)
    #[must_use = "builder methods return a new value"]
    pub fn backend<B: Backend + 'static>(self, backend: B) -> Self {
        self.shared_backend(Arc::new(backend))
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Enable remote forwarding
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: DispatchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the HTTP sinks
    ///
    /// Requires [`FanoutLoggerBuilder::config`].
    #[must_use = "builder methods return a new value"]
    pub fn sinks(mut self, columnar: Arc<dyn Sink>, chat: Arc<dyn Sink>) -> Self {
        self.sinks = Some((columnar, chat));
        self
    }

    /// Build the FanoutLogger
    ///
    /// # Errors
    ///
    /// Returns error if sinks were given without a config, or if the HTTP
    /// client for the default sinks cannot be built
    pub fn build(self) -> Result<FanoutLogger> {
        let backend = self
            .backend
            .unwrap_or_else(|| Arc::new(ConsoleBackend::new()));

        let dispatcher = match (self.config, self.sinks) {
            (None, None) => None,
            (None, Some(_)) => {
                return Err(LoggerError::config(
                    "FanoutLoggerBuilder",
                    "sinks require a DispatchConfig",
                ))
            }
            (Some(config), Some((columnar, chat))) => Some(Dispatcher::with_sinks(
                config,
                columnar,
                chat,
                Arc::clone(&backend),
            )),
            (Some(config), None) => Some(Dispatcher::new(config, Arc::clone(&backend))?),
        };

        Ok(FanoutLogger {
            backend,
            dispatcher,
        })
    }
}

impl Default for FanoutLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
