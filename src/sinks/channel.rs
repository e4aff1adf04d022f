//! In-process sink backed by a crossbeam channel
//!
//! Hands every payload to a receiver in the same process. Useful for tests
//! and for consumers that ship payloads themselves.

use crate::core::{LoggerError, Result, Sink};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};

/// # Example
///
/// ```
/// use rust_fanout_logger::sinks::ChannelSink;
/// use rust_fanout_logger::core::Sink;
///
/// let (sink, rx) = ChannelSink::unbounded("columnar");
/// sink.send("payload").unwrap();
/// assert_eq!(rx.recv().unwrap(), "payload");
/// ```
pub struct ChannelSink {
    name: String,
    sender: Sender<String>,
}

impl ChannelSink {
    pub fn new(name: impl Into<String>, sender: Sender<String>) -> Self {
        Self {
            name: name.into(),
            sender,
        }
    }

    pub fn unbounded(name: impl Into<String>) -> (Self, Receiver<String>) {
        let (sender, receiver) = unbounded();
        (Self::new(name, sender), receiver)
    }

    /// A full channel drops the payload and reports it as a failure
    pub fn bounded(name: impl Into<String>, capacity: usize) -> (Self, Receiver<String>) {
        let (sender, receiver) = bounded(capacity);
        (Self::new(name, sender), receiver)
    }
}

impl Sink for ChannelSink {
    fn send(&self, payload: &str) -> Result<()> {
        match self.sender.try_send(payload.to_owned()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(LoggerError::other(format!(
                "Sink channel '{}' is full, payload dropped",
                self.name
            ))),
            Err(TrySendError::Disconnected(_)) => Err(LoggerError::channel_closed(&self.name)),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
