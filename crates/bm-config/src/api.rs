//! Company-intelligence API credentials and endpoint.

use serde::{Deserialize, Serialize};

/// Public v4 endpoint.
fn default_base_url() -> String {
    String::from("https://api.crunchbase.com/api/v4")
}

/// Per-request timeout.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Static key sent as the `user_key` query parameter.
    #[serde(default)]
    pub user_key: String,

    /// Base URL without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            user_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Check if the API config has the minimum required fields.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.user_key.is_empty()
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = ApiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.base_url(), "https://api.crunchbase.com/api/v4");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn base_url_trims_trailing_slash() {
        let config = ApiConfig {
            user_key: "key".into(),
            base_url: "http://localhost:8080/".into(),
            timeout_secs: 5,
        };
        assert!(config.is_configured());
        assert_eq!(config.base_url(), "http://localhost:8080");
    }
}
