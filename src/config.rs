use std::time::Duration;

use crate::constants::{USER_AGENT, WTTR_API_BASE};

/// Settings for the outbound weather client
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Base URL the location path is appended to
    pub api_base: String,
    pub user_agent: String,
    /// Per-request timeout; `None` waits for the upstream indefinitely
    pub timeout: Option<Duration>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base: WTTR_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl WeatherConfig {
    /// Points the client at a different endpoint, e.g. a local mock
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
