//! Message types for the application (TEA pattern)

use folio_core::{Field, SubmissionId};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick for periodic updates (popup auto-dismiss)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Editing (applies to the focused field)
    // ─────────────────────────────────────────────────────────
    InputChar(char),
    Backspace,
    ClearField,

    /// Overwrite a field wholesale (headless prefill)
    SetField { field: Field, value: String },

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────
    /// Submit control activated
    Submit,

    /// The relay accepted the message
    SubmissionSucceeded { submission: SubmissionId },

    /// The relay call failed or its task ended without reporting
    SubmissionFailed {
        submission: SubmissionId,
        reason: String,
    },

    /// Close the outcome popup
    DismissPopup,
}
