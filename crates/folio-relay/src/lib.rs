//! # folio-relay - Mail Relay Boundary
//!
//! The contact form never talks to an SMTP server itself. Submissions are
//! handed to a third-party transactional email provider (EmailJS) that turns
//! the three form fields into an email using a stored template.
//!
//! Depends on [`folio_core`] for the form model and error handling.
//!
//! ## Public API
//!
//! ### Relay Trait
//! - [`MailRelay`] - `Send` variant of the relay boundary, used by the app layer
//! - [`LocalMailRelay`] - Same trait without the `Send` bound on futures
//! - [`TemplateParams`] - Named template variables (`name`, `email`, `message`)
//! - [`RelayReceipt`] - Provider acknowledgement of an accepted send
//!
//! ### EmailJS Client
//! - [`EmailJsRelay`] - HTTP client for the EmailJS REST API
//! - [`RelayOptions`] - Public key, endpoint, and timeout
//!
//! ### Process-wide Client
//! - [`init()`] - Create the client once at startup
//! - [`client()`] - The initialized client, if any
//!
//! ### Errors
//! - [`RelayError`] - Transport, timeout, and provider rejection failures

pub mod emailjs;
pub mod error;
pub mod relay;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

use std::sync::{Arc, OnceLock};

use folio_core::prelude::*;

pub use emailjs::{EmailJsRelay, RelayOptions, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
pub use error::RelayError;
pub use relay::{LocalMailRelay, MailRelay, RelayReceipt, TemplateParams};

static CLIENT: OnceLock<Arc<EmailJsRelay>> = OnceLock::new();

/// Initialize the process-wide EmailJS client.
///
/// Must run once before the first submission. The client is never replaced:
/// a second call fails with [`RelayError::AlreadyInitialized`]. Callers keep
/// the returned handle and inject it where it is needed; [`client()`] exists
/// for code that only has to check whether initialization happened.
pub fn init(options: RelayOptions) -> std::result::Result<Arc<EmailJsRelay>, RelayError> {
    if CLIENT.get().is_some() {
        return Err(RelayError::AlreadyInitialized);
    }

    let relay = Arc::new(EmailJsRelay::new(options)?);
    CLIENT
        .set(relay.clone())
        .map_err(|_| RelayError::AlreadyInitialized)?;

    info!("Mail relay initialized (endpoint: {})", relay.endpoint());
    Ok(relay)
}

/// The process-wide client, if [`init()`] has succeeded
pub fn client() -> Option<Arc<EmailJsRelay>> {
    CLIENT.get().cloned()
}
