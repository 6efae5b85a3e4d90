//! Verification backend configuration module

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for the verification backend
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the verification scenario endpoint
    pub base_url: String,

    /// API key sent as `X-API-KEY`
    #[serde(default)]
    pub api_key: String,

    /// Bearer token used until the user stores another one
    #[serde(default)]
    pub json_web_token: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Privacy policy page opened from the settings screen
    #[serde(default)]
    pub privacy_policy_url: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8080/api/v1/scenarios"),
            api_key: String::new(),
            json_web_token: String::new(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            privacy_policy_url: None,
        }
    }
}

impl BackendConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: std::env::var("KYC_BASE_URL").unwrap_or(defaults.base_url),
            api_key: std::env::var("KYC_API_KEY").unwrap_or_default(),
            json_web_token: std::env::var("KYC_JSON_WEB_TOKEN").unwrap_or_default(),
            request_timeout_secs: std::env::var("KYC_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            connect_timeout_secs: std::env::var("KYC_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.connect_timeout_secs),
            privacy_policy_url: std::env::var("KYC_PRIVACY_POLICY_URL").ok(),
        }
    }

    /// Create a configuration pointing at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the default bearer token
    pub fn with_json_web_token(mut self, token: impl Into<String>) -> Self {
        self.json_web_token = token.into();
        self
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Connect timeout as a `Duration`
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}
