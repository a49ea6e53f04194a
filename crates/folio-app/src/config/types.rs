//! Configuration types for Folio
//!
//! Defines `Settings` (the `config.toml` file) and its sections.

use std::time::Duration;

use folio_core::EmailRule;
use folio_relay::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub relay: RelaySettings,

    #[serde(default)]
    pub popup: PopupSettings,

    #[serde(default)]
    pub validation: ValidationSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Mail relay account and connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelaySettings {
    /// Email service configured in the provider dashboard
    #[serde(default = "default_service_id")]
    pub service_id: String,

    /// Template that renders the `name`, `email`, and `message` variables
    #[serde(default)]
    pub template_id: String,

    /// Account public key
    #[serde(default)]
    pub public_key: String,

    /// Account private key; empty when the account accepts public-key calls
    #[serde(default)]
    pub private_key: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in milliseconds; zero is rejected at startup
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            service_id: default_service_id(),
            template_id: String::new(),
            public_key: String::new(),
            private_key: String::new(),
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl RelaySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_service_id() -> String {
    "default_service".to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Outcome popup behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PopupSettings {
    /// Close the popup after this many milliseconds; 0 waits for the user
    #[serde(default)]
    pub auto_dismiss_ms: u64,
}

impl PopupSettings {
    pub fn auto_dismiss(&self) -> Option<Duration> {
        (self.auto_dismiss_ms > 0).then(|| Duration::from_millis(self.auto_dismiss_ms))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationSettings {
    #[serde(default)]
    pub email_rule: EmailRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Heading shown above the form
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    "Get in touch".to_string()
}
