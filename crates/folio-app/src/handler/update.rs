//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{contact, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => contact::handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // Focus & Editing
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.contact.focus_next();
            UpdateResult::none()
        }
        Message::FocusPrev => {
            state.contact.focus_prev();
            UpdateResult::none()
        }
        Message::InputChar(c) => contact::handle_input_char(state, c),
        Message::Backspace => contact::handle_backspace(state),
        Message::ClearField => contact::handle_clear_field(state),
        Message::SetField { field, value } => {
            state.contact.set_field(field, value);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission
        // ─────────────────────────────────────────────────────────
        Message::Submit => contact::handle_submit(state),
        Message::SubmissionSucceeded { submission } => {
            contact::handle_submission_succeeded(state, submission)
        }
        Message::SubmissionFailed { submission, reason } => {
            contact::handle_submission_failed(state, submission, &reason)
        }
        Message::DismissPopup => contact::handle_dismiss_popup(state),
    }
}
