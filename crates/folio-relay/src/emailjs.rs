//! EmailJS REST client
//!
//! EmailJS accepts a single JSON POST per message:
//!
//! ```json
//! {
//!   "service_id": "default_service",
//!   "template_id": "template_xxx",
//!   "user_id": "<public key>",
//!   "accessToken": "<private key, optional>",
//!   "template_params": { "name": "...", "email": "...", "message": "..." }
//! }
//! ```
//!
//! A 200 response with body `OK` means the message was queued. Anything else
//! is a rejection whose body explains the reason.

use std::time::Duration;

use folio_core::prelude::*;
use serde::Serialize;
use url::Url;

use crate::error::RelayError;
use crate::relay::{MailRelay, RelayReceipt, TemplateParams};

/// Public EmailJS send endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for [`EmailJsRelay`]
#[derive(Debug, Clone)]
pub struct RelayOptions {
    /// Account public key, sent as `user_id`
    pub public_key: String,
    /// Private key, required when the account restricts API calls to
    /// non-browser clients holding it
    pub private_key: Option<String>,
    pub endpoint: String,
    pub timeout: Duration,
}

impl RelayOptions {
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        let key = private_key.into();
        self.private_key = (!key.is_empty()).then_some(key);
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct SendPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

/// HTTP client for the EmailJS send API
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    http: reqwest::Client,
    endpoint: Url,
    public_key: String,
    private_key: Option<String>,
    timeout: Duration,
}

impl EmailJsRelay {
    pub fn new(options: RelayOptions) -> std::result::Result<Self, RelayError> {
        if options.public_key.trim().is_empty() {
            return Err(RelayError::InvalidConfig(
                "public key must not be empty".to_string(),
            ));
        }

        let endpoint = Url::parse(&options.endpoint).map_err(|e| {
            RelayError::InvalidConfig(format!("invalid endpoint '{}': {}", options.endpoint, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| RelayError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint,
            public_key: options.public_key,
            private_key: options.private_key,
            timeout: options.timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, err: reqwest::Error) -> RelayError {
        if err.is_timeout() {
            RelayError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            RelayError::Transport(err.to_string())
        }
    }
}

impl MailRelay for EmailJsRelay {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> std::result::Result<RelayReceipt, RelayError> {
        let payload = SendPayload {
            service_id,
            template_id,
            user_id: &self.public_key,
            access_token: self.private_key.as_deref(),
            template_params: params,
        };

        debug!(
            "POST {} (service: {}, template: {})",
            self.endpoint, service_id, template_id
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.classify(e))?;

        if status.is_success() {
            debug!("Relay accepted message: {} {}", status.as_u16(), text);
            Ok(RelayReceipt {
                status: status.as_u16(),
                text,
            })
        } else {
            warn!("Relay rejected message: {} {}", status.as_u16(), text);
            Err(RelayError::Rejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}
