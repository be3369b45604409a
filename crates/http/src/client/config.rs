//! Client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hosted Tasklist API
pub const DEFAULT_BASE_URL: &str =
    "https://todo-api-sathya-aqdke9fycteqegdh.centralindia-01.azurewebsites.net";

/// Default user agent sent by native clients
pub const DEFAULT_USER_AGENT: &str = concat!("tasklist-client/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`TodoClient`](super::TodoClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base address, without the `/api` prefix
    pub base_url: String,

    /// Request timeout in seconds. Ignored on wasm.
    pub timeout_secs: Option<u64>,

    /// User agent header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"http://localhost:5000"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
