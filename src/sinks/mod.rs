//! Sink implementations

pub mod channel;
pub mod chat;
pub mod columnar;

pub use channel::ChannelSink;
pub use chat::ChatSink;
pub use columnar::ColumnarSink;

pub use crate::core::Sink;

use crate::core::{LoggerError, Result};
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;

/// Build a blocking HTTP client on a short-lived thread
///
/// The blocking client cannot be constructed from inside an async runtime,
/// and `init` is usually called from one.
pub(crate) fn build_client(component: &str, timeout: Duration) -> Result<Client> {
    let handle = thread::Builder::new()
        .name(format!("{}-client", component))
        .spawn(move || Client::builder().timeout(timeout).build())
        .map_err(|e| LoggerError::spawn(component, e))?;

    match handle.join() {
        Ok(Ok(client)) => Ok(client),
        Ok(Err(e)) => Err(LoggerError::config(component, e.without_url().to_string())),
        Err(_) => Err(LoggerError::config(
            component,
            "HTTP client construction panicked",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_outside_runtime() {
        assert!(build_client("columnar", Duration::from_millis(100)).is_ok());
    }

    #[tokio::test]
    async fn test_build_client_inside_runtime() {
        let client = build_client("chat", Duration::from_millis(100));
        assert!(client.is_ok());
    }
}
