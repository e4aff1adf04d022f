//! Chat webhook sink
//!
//! The payload is the full request target (webhook base plus the escaped
//! alert text); the request body stays empty.

use crate::core::{LoggerError, Result, Sink};
use reqwest::blocking::Client;
use std::time::Duration;

pub struct ChatSink {
    client: Client,
}

impl ChatSink {
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = super::build_client("ChatSink", timeout)?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Sink for ChatSink {
    fn send(&self, payload: &str) -> Result<()> {
        let response = self
            .client
            .post(payload)
            .send()
            .map_err(|e| LoggerError::transport(payload, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoggerError::unexpected_status(payload, status.as_u16()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "chat"
    }
}
