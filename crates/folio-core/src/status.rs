//! Submission status for the contact form

use serde::{Deserialize, Serialize};

/// Lifecycle of a contact form submission.
///
/// ```text
/// Idle --(submit, valid)--> Submitting
/// Submitting --(relay ok)--> Success
/// Submitting --(relay err)--> Error
/// Success | Error --(dismiss)--> Idle
/// ```
///
/// `Submitting` is only left through `Success` or `Error`, which keeps at most
/// one relay call in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Submit control is inert while a request is outstanding
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// `Success` and `Error` are shown as a popup until dismissed
    pub fn shows_popup(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }

    /// Caption for the submit control
    pub fn submit_caption(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Text of the outcome popup, if any
    pub fn popup_message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Success => Some("Thank you! I will get back to you very shortly."),
            SubmissionStatus::Error => Some("Failed to send message. Please try again."),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "idle"),
            SubmissionStatus::Submitting => write!(f, "submitting"),
            SubmissionStatus::Success => write!(f, "success"),
            SubmissionStatus::Error => write!(f, "error"),
        }
    }
}

/// Identifies a single relay call.
///
/// Completions carry the id they were started with; a completion whose id is
/// not the one currently in flight is stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct SubmissionId(pub u64);

impl SubmissionId {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
