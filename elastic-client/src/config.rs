//! Configuration types for the client.

use std::time::Duration;

/// Configuration for the Elasticsearch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Timeout applied to every request.
    /// Set to None to disable the timeout (not recommended for production).
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ClientConfig {
    /// Create a config with no request timeout (use with caution).
    pub fn no_timeout() -> Self {
        Self {
            request_timeout: None,
        }
    }

    /// Create a config with a custom request timeout.
    pub fn with_timeout(request_timeout: Duration) -> Self {
        Self {
            request_timeout: Some(request_timeout),
        }
    }
}
