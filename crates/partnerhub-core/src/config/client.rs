//! Dashboard API client configuration.

use serde::{Deserialize, Serialize};

/// Settings for the session-aware HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the dashboard API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Role assumed for credential renewal when the session holds none:
    /// `"seller"` or `"creator"`. Parsed and validated at client
    /// construction time.
    #[serde(default = "default_fallback_role")]
    pub fallback_role: String,
    /// Overall request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Path of the login entry point users are sent to when the session
    /// cannot be renewed.
    #[serde(default = "default_login_entry_path")]
    pub login_entry_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fallback_role: default_fallback_role(),
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            login_entry_path: default_login_entry_path(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_fallback_role() -> String {
    "creator".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_login_entry_path() -> String {
    "/login".to_string()
}
