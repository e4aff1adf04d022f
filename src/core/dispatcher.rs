//! Fire-and-forget fan-out to the remote sinks
//!
//! Every dispatch runs on its own detached thread: no pool, no queue, no
//! cap. The caller never waits on it and never learns how it ended. Sink
//! errors and sink panics are caught at the thread boundary and written to
//! the local backend only, so a failing chat sink cannot feed itself.

use super::{
    backend::Backend,
    config::DispatchConfig,
    encode,
    error::{LoggerError, Result},
    event::{current_timestamp, LogEvent},
    level::Level,
    sink::Sink,
};
use crate::sinks::{ChatSink, ColumnarSink};
use std::sync::Arc;
use std::thread;

/// Owns the dispatch configuration and the two remote sinks
#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<DispatchConfig>,
    columnar: Arc<dyn Sink>,
    chat: Arc<dyn Sink>,
    backend: Arc<dyn Backend>,
}

impl Dispatcher {
    /// Build a dispatcher delivering over HTTP
    ///
    /// `backend` receives the local notice for every failed delivery.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be constructed
    pub fn new(config: DispatchConfig, backend: Arc<dyn Backend>) -> Result<Self> {
        let columnar = ColumnarSink::new(&config.columnar_endpoint, config.request_timeout)?;
        let chat = ChatSink::new(config.request_timeout)?;
        Ok(Self::with_sinks(
            config,
            Arc::new(columnar),
            Arc::new(chat),
            backend,
        ))
    }

    /// Build a dispatcher over arbitrary sinks
    pub fn with_sinks(
        config: DispatchConfig,
        columnar: Arc<dyn Sink>,
        chat: Arc<dyn Sink>,
        backend: Arc<dyn Backend>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            columnar,
            chat,
            backend,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Forward an event to the sinks its level routes to
    pub fn dispatch(&self, event: &LogEvent) {
        let route = event.level.route();
        if route.columnar {
            self.dispatch_columnar(event.clone());
        }
        if route.chat {
            self.dispatch_chat(event.clone());
        }
    }

    /// The row is stamped when the dispatch unit runs, not when the event
    /// was built.
    pub fn dispatch_columnar(&self, event: LogEvent) {
        let config = Arc::clone(&self.config);
        spawn_dispatch(&self.columnar, &self.backend, move || {
            let event = event.with_timestamp(current_timestamp());
            encode::columnar_row(&event, &config)
        });
    }

    pub fn dispatch_chat(&self, event: LogEvent) {
        let config = Arc::clone(&self.config);
        spawn_dispatch(&self.chat, &self.backend, move || {
            encode::chat_url(&event, &config)
        });
    }
}

/// Encode and send on a detached thread
fn spawn_dispatch<F>(sink: &Arc<dyn Sink>, backend: &Arc<dyn Backend>, encode: F)
where
    F: FnOnce() -> String + Send + 'static,
{
    let sink_for_unit = Arc::clone(sink);
    let backend_for_unit = Arc::clone(backend);

    // Thread names must not contain NUL
    let spawned = thread::Builder::new()
        .name(format!("dispatch-{}", sink.name().replace('\0', "")))
        .spawn(move || run_dispatch(sink_for_unit.as_ref(), backend_for_unit.as_ref(), encode));

    // Detached: the JoinHandle is dropped here.
    if let Err(e) = spawned {
        report_failure(backend.as_ref(), &LoggerError::spawn(sink.name(), e));
    }
}

fn run_dispatch<F>(sink: &dyn Sink, backend: &dyn Backend, encode: F)
where
    F: FnOnce() -> String,
{
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let payload = encode();
        sink.send(&payload)
    }));

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(e)) => report_failure(backend, &e),
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            backend.write(
                Level::Error,
                &format!("Dispatch to sink '{}' panicked: {}", sink.name(), panic_msg),
            );
        }
    }
}

fn report_failure(backend: &dyn Backend, error: &LoggerError) {
    backend.write(Level::Error, &format!("Remote log dispatch failed: {}", error));
}
