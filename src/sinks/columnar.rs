//! Columnar store sink
//!
//! POSTs each encoded row to the insert endpoint of the columnar store
//! (typically a ClickHouse bulk-insert proxy).

use crate::core::{LoggerError, Result, Sink};
use reqwest::blocking::Client;
use std::time::Duration;

pub struct ColumnarSink {
    client: Client,
    endpoint: String,
}

impl ColumnarSink {
    /// Create a sink posting to `endpoint`
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = super::build_client("ColumnarSink", timeout)?;

        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Sink for ColumnarSink {
    fn send(&self, payload: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .body(payload.to_owned())
            .send()
            .map_err(|e| LoggerError::transport(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoggerError::unexpected_status(&self.endpoint, status.as_u16()));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "columnar"
    }
}
