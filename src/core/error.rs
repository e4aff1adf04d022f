//! Error types for the logger system
//!
//! None of these reach a log caller. They surface from bootstrap calls
//! (`init`, `Dispatcher::new`) and from sinks, where the dispatch boundary
//! turns them into a local log line.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Transport-level HTTP failure
    ///
    /// `endpoint` holds only scheme, host and port; webhook paths and queries
    /// often carry tokens.
    #[error("HTTP request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote answered with a non-success status
    #[error("HTTP request to {endpoint} returned status {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    /// In-process receiver is gone
    #[error("Sink channel '{sink}' is closed")]
    ChannelClosed { sink: String },

    /// A dispatch unit could not be started
    #[error("Failed to spawn dispatch for sink '{sink}': {source}")]
    Spawn {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a transport error for an endpoint
    ///
    /// The endpoint is redacted and the URL is stripped from `source`.
    pub fn transport(endpoint: &str, source: reqwest::Error) -> Self {
        LoggerError::Transport {
            endpoint: redact_endpoint(endpoint),
            source: source.without_url(),
        }
    }

    pub fn unexpected_status(endpoint: &str, status: u16) -> Self {
        LoggerError::UnexpectedStatus {
            endpoint: redact_endpoint(endpoint),
            status,
        }
    }

    pub fn channel_closed(sink: impl Into<String>) -> Self {
        LoggerError::ChannelClosed { sink: sink.into() }
    }

    pub fn spawn(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Spawn {
            sink: sink.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

/// Reduce a URL to `scheme://host[:port]`
fn redact_endpoint(endpoint: &str) -> String {
    match url::Url::parse(endpoint) {
        Ok(url) => match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}://{}:{}", url.scheme(), host, port),
            (Some(host), None) => format!("{}://{}", url.scheme(), host),
            (None, _) => format!("{}:", url.scheme()),
        },
        Err(_) => "<unparsable endpoint>".to_string(),
    }
}
