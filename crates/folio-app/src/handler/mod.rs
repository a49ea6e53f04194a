//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers (form vs. popup)
//! - `contact`: Form editing and the submission coordinator

pub(crate) mod contact;
pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use folio_core::SubmissionId;
use folio_relay::TemplateParams;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Everything the action layer needs to perform one relay call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub params: TemplateParams,
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Send the validated form through the mail relay.
    ///
    /// The outcome comes back as `SubmissionSucceeded` or `SubmissionFailed`
    /// carrying the same `submission` id.
    SendContactForm {
        submission: SubmissionId,
        request: RelayRequest,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
