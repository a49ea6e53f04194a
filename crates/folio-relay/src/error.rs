//! Mail relay error types

use thiserror::Error;

/// Why a send did not reach the provider or was refused by it.
///
/// The detail is for logs only; the user sees a generic failure popup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("mail relay client already initialized")]
    AlreadyInitialized,

    #[error("invalid relay configuration: {0}")]
    InvalidConfig(String),

    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider rejected the message (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<RelayError> for folio_core::Error {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::InvalidConfig(message) => folio_core::Error::config_invalid(message),
            other => folio_core::Error::relay(other.to_string()),
        }
    }
}
