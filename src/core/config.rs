//! Process-wide dispatch configuration

use super::error::{LoggerError, Result};
use serde::Deserialize;
use std::time::Duration;

/// Default bound on a single remote delivery attempt (5 seconds)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Remote sink endpoints and the tags stamped on every forwarded event
///
/// Built once at startup and shared read-only by every dispatch.
///
/// # Example
///
/// ```
/// use rust_fanout_logger::DispatchConfig;
///
/// let config = DispatchConfig::new(
///     "https://chat.example/hook?",
///     "orders",
///     "https://ch.example/insert",
///     "prod",
/// );
/// assert_eq!(config.service_name, "orders");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DispatchConfig {
    pub chat_webhook_base: String,
    pub service_name: String,
    pub columnar_endpoint: String,
    pub environment_tag: String,
    #[serde(
        rename = "request_timeout_ms",
        deserialize_with = "millis::deserialize",
        default = "default_timeout"
    )]
    pub request_timeout: Duration,
}

fn default_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

mod millis {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

impl DispatchConfig {
    pub fn new(
        chat_webhook_base: impl Into<String>,
        service_name: impl Into<String>,
        columnar_endpoint: impl Into<String>,
        environment_tag: impl Into<String>,
    ) -> Self {
        Self {
            chat_webhook_base: chat_webhook_base.into(),
            service_name: service_name.into(),
            columnar_endpoint: columnar_endpoint.into(),
            environment_tag: environment_tag.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Parse a configuration from JSON
    ///
    /// `request_timeout_ms` is optional and defaults to 5000.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.request_timeout.is_zero() {
            return Err(LoggerError::config(
                "DispatchConfig",
                "request_timeout_ms must be greater than zero",
            ));
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
