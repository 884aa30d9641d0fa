//! HTTP request execution configuration.

use crate::config::ClientConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters that control how the HTTP transport executes requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Request timeout in seconds.
    ///
    /// Maximum time to wait for a complete response (including connection,
    /// headers, and body download). Always finite.
    pub timeout_secs: u64,

    /// Value of the User-Agent header sent with every request.
    pub user_agent: String,
}

impl ExecutionConfig {
    /// Creates a new ExecutionConfig with the given timeout and the default user agent.
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout_secs,
            user_agent: ClientConfig::default().user_agent,
        }
    }

    /// Returns the timeout as a `std::time::Duration`.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl From<&ClientConfig> for ExecutionConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            timeout_secs: config.timeout_secs,
            user_agent: config.user_agent.clone(),
        }
    }
}
