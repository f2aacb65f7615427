use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub form: FormConfig,
}

/// REST backend the gateway talks to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Scheme + host + port of the backend (e.g., "http://localhost:8080").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds. Unset leaves the transport default.
    #[serde(default)]
    pub request_timeout_seconds: Option<u32>,
}

/// Where the session flag is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage file override. Defaults to `<data dir>/shopfront/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Registration form behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Pop a dialog when the phone entry is not a number (default: true).
    #[serde(default = "default_true")]
    pub notify_invalid_phone: bool,
    /// Pop a dialog when the email entry is not email-shaped (default: false).
    #[serde(default)]
    pub notify_invalid_email: bool,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            notify_invalid_phone: true,
            notify_invalid_email: false,
        }
    }
}
