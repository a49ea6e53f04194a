//! Tests for handler module

use std::time::{Duration, Instant};

use super::*;
use crate::contact::Focus;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState};
use folio_core::{Field, FieldError, SubmissionStatus};

fn filled_state() -> AppState {
    let mut state = AppState::new();
    state.settings.relay.template_id = "template_abc".into();
    state.contact.set_field(Field::Name, "Ada");
    state.contact.set_field(Field::Email, "ada@example.com");
    state.contact.set_field(Field::Message, "Hello there");
    state
}

/// Run a message and any follow-up messages it produces
fn run(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

/// Submit a valid form and return the id of the started submission
fn start_submission(state: &mut AppState) -> SubmissionId {
    let result = update(state, Message::Submit);
    match result.action {
        Some(UpdateAction::SendContactForm { submission, .. }) => submission,
        other => panic!("expected SendContactForm, got {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_and_esc_quit_from_form() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_goes_to_focused_field() {
    let mut state = AppState::new();
    for c in "Ada".chars() {
        let msg = handle_key(&state, InputKey::Char(c)).unwrap();
        update(&mut state, msg);
    }
    assert_eq!(state.contact.field(Field::Name), "Ada");

    run(&mut state, Message::Key(InputKey::Tab));
    run(&mut state, Message::Key(InputKey::Char('x')));
    assert_eq!(state.contact.field(Field::Email), "x");

    run(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.contact.field(Field::Email), "");
}

#[test]
fn test_enter_advances_focus_then_submits_on_button() {
    let mut state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::FocusNext));

    state.contact.focus = Focus::Submit;
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::Submit));
}

#[test]
fn test_ctrl_s_submits_from_any_field() {
    let mut state = AppState::new();
    state.contact.focus = Focus::Field(Field::Message);
    assert_eq!(handle_key(&state, InputKey::CharCtrl('s')), Some(Message::Submit));
}

#[test]
fn test_alt_enter_inserts_newline_only_in_message() {
    let mut state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::AltEnter), None);

    state.contact.focus = Focus::Field(Field::Message);
    assert_eq!(
        handle_key(&state, InputKey::AltEnter),
        Some(Message::InputChar('\n'))
    );
}

#[test]
fn test_chars_ignored_on_submit_button() {
    let mut state = AppState::new();
    state.contact.focus = Focus::Submit;
    assert_eq!(handle_key(&state, InputKey::Char('a')), None);
    assert_eq!(handle_key(&state, InputKey::Backspace), None);
}

#[test]
fn test_popup_swallows_form_keys() {
    let mut state = AppState::new();
    state.contact.status = SubmissionStatus::Success;

    assert_eq!(handle_key(&state, InputKey::Char('a')), None);
    assert_eq!(handle_key(&state, InputKey::Tab), None);
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::DismissPopup));
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::DismissPopup));
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

// ─────────────────────────────────────────────────────────
// Submission coordinator
// ─────────────────────────────────────────────────────────

#[test]
fn test_valid_submit_enters_submitting_with_request() {
    let mut state = filled_state();

    let result = update(&mut state, Message::Submit);

    assert_eq!(state.contact.status, SubmissionStatus::Submitting);
    assert_eq!(state.contact.status.submit_caption(), "Sending...");
    match result.action {
        Some(UpdateAction::SendContactForm {
            submission,
            request,
        }) => {
            assert_eq!(state.contact.in_flight, Some(submission));
            assert_eq!(request.service_id, "default_service");
            assert_eq!(request.template_id, "template_abc");
            assert_eq!(request.params.get("name"), Some("Ada"));
            assert_eq!(request.params.get("email"), Some("ada@example.com"));
            assert_eq!(request.params.get("message"), Some("Hello there"));
        }
        other => panic!("expected SendContactForm, got {:?}", other),
    }
}

#[test]
fn test_success_resets_form_and_shows_popup() {
    let mut state = filled_state();
    let submission = start_submission(&mut state);

    update(&mut state, Message::SubmissionSucceeded { submission });

    assert_eq!(state.contact.status, SubmissionStatus::Success);
    assert!(state.contact.values.is_empty());
    assert!(state.contact.in_flight.is_none());
    assert!(state.contact.popup_shown_at.is_some());
}

#[test]
fn test_failure_keeps_form_values() {
    let mut state = filled_state();
    let submission = start_submission(&mut state);

    update(
        &mut state,
        Message::SubmissionFailed {
            submission,
            reason: "HTTP 500".into(),
        },
    );

    assert_eq!(state.contact.status, SubmissionStatus::Error);
    assert_eq!(state.contact.field(Field::Name), "Ada");
    assert_eq!(state.contact.field(Field::Email), "ada@example.com");
    assert_eq!(state.contact.field(Field::Message), "Hello there");
}

#[test]
fn test_empty_name_short_circuits() {
    let mut state = filled_state();
    state.contact.set_field(Field::Name, "");
    state.contact.focus = Focus::Submit;

    let result = update(&mut state, Message::Submit);

    assert!(result.action.is_none());
    assert_eq!(state.contact.status, SubmissionStatus::Idle);
    assert_eq!(state.contact.errors.len(), 1);
    assert_eq!(state.contact.errors.get(Field::Name), Some(FieldError::Required));
    // focus jumps to the first invalid field
    assert_eq!(state.contact.focus, Focus::Field(Field::Name));
}

#[test]
fn test_invalid_email_reported_inline() {
    let mut state = filled_state();
    state.contact.set_field(Field::Email, "ada.example.com");

    let result = update(&mut state, Message::Submit);

    assert!(result.action.is_none());
    assert_eq!(
        state.contact.errors.message(Field::Email),
        Some("Email is invalid")
    );
}

#[test]
fn test_loose_email_rule_from_settings() {
    let mut state = filled_state();
    state.settings.validation.email_rule = folio_core::EmailRule::Loose;
    state.contact.set_field(Field::Email, "mail me: ada@example.com");

    let result = update(&mut state, Message::Submit);
    assert!(result.action.is_some());
}

#[test]
fn test_resubmit_revalidates_wholesale() {
    let mut state = AppState::new();
    update(&mut state, Message::Submit);
    assert_eq!(state.contact.errors.len(), 3);

    state.contact.set_field(Field::Name, "Ada");
    state.contact.set_field(Field::Email, "bad");
    update(&mut state, Message::Submit);

    assert_eq!(state.contact.errors.fields(), vec![Field::Email, Field::Message]);
    assert_eq!(
        state.contact.errors.get(Field::Email),
        Some(FieldError::InvalidFormat)
    );
}

#[test]
fn test_second_submit_while_submitting_is_noop() {
    let mut state = filled_state();
    let first = start_submission(&mut state);

    let result = update(&mut state, Message::Submit);

    assert!(result.action.is_none());
    assert_eq!(state.contact.status, SubmissionStatus::Submitting);
    assert_eq!(state.contact.in_flight, Some(first));
}

#[test]
fn test_submit_while_popup_open_is_noop() {
    let mut state = filled_state();
    let submission = start_submission(&mut state);
    update(
        &mut state,
        Message::SubmissionFailed {
            submission,
            reason: "timeout".into(),
        },
    );

    let result = update(&mut state, Message::Submit);

    assert!(result.action.is_none());
    assert_eq!(state.contact.status, SubmissionStatus::Error);
}

#[test]
fn test_editing_clears_only_that_fields_error() {
    let mut state = AppState::new();
    update(&mut state, Message::Submit);
    assert_eq!(state.contact.errors.len(), 3);

    state.contact.focus = Focus::Field(Field::Name);
    update(&mut state, Message::InputChar('A'));

    assert!(!state.contact.errors.contains(Field::Name));
    assert!(state.contact.errors.contains(Field::Email));
    assert!(state.contact.errors.contains(Field::Message));
}

#[test]
fn test_set_field_message_clears_error() {
    let mut state = AppState::new();
    update(&mut state, Message::Submit);

    update(
        &mut state,
        Message::SetField {
            field: Field::Message,
            value: "hi".into(),
        },
    );

    assert!(!state.contact.errors.contains(Field::Message));
    assert_eq!(state.contact.errors.len(), 2);
}

#[test]
fn test_dismiss_returns_to_idle_and_keeps_values() {
    let mut state = filled_state();
    let submission = start_submission(&mut state);
    update(
        &mut state,
        Message::SubmissionFailed {
            submission,
            reason: "HTTP 400".into(),
        },
    );

    update(&mut state, Message::DismissPopup);

    assert_eq!(state.contact.status, SubmissionStatus::Idle);
    assert!(state.contact.popup_shown_at.is_none());
    assert_eq!(state.contact.field(Field::Name), "Ada");
}

#[test]
fn test_dismiss_after_success_leaves_form_empty() {
    let mut state = filled_state();
    let submission = start_submission(&mut state);
    update(&mut state, Message::SubmissionSucceeded { submission });

    update(&mut state, Message::DismissPopup);

    assert_eq!(state.contact.status, SubmissionStatus::Idle);
    assert!(state.contact.values.is_empty());
}

#[test]
fn test_dismiss_without_popup_is_noop() {
    let mut state = filled_state();
    start_submission(&mut state);

    update(&mut state, Message::DismissPopup);

    assert_eq!(state.contact.status, SubmissionStatus::Submitting);
}

#[test]
fn test_stale_completion_is_ignored() {
    let mut state = filled_state();
    let submission = start_submission(&mut state);

    update(
        &mut state,
        Message::SubmissionSucceeded {
            submission: submission.next(),
        },
    );

    assert_eq!(state.contact.status, SubmissionStatus::Submitting);
    assert_eq!(state.contact.field(Field::Name), "Ada");
}

#[test]
fn test_completion_after_outcome_is_ignored() {
    let mut state = filled_state();
    let submission = start_submission(&mut state);
    update(&mut state, Message::SubmissionSucceeded { submission });
    update(&mut state, Message::DismissPopup);

    update(
        &mut state,
        Message::SubmissionFailed {
            submission,
            reason: "late".into(),
        },
    );

    assert_eq!(state.contact.status, SubmissionStatus::Idle);
}

#[test]
fn test_completion_while_quitting_is_ignored() {
    let mut state = filled_state();
    let submission = start_submission(&mut state);
    update(&mut state, Message::Quit);

    update(&mut state, Message::SubmissionSucceeded { submission });

    assert_eq!(state.contact.status, SubmissionStatus::Submitting);
    assert_eq!(state.contact.field(Field::Name), "Ada");
}

#[test]
fn test_edits_during_submitting_are_kept_on_failure() {
    let mut state = filled_state();
    let submission = start_submission(&mut state);
    state.contact.focus = Focus::Field(Field::Message);
    update(&mut state, Message::InputChar('!'));

    update(
        &mut state,
        Message::SubmissionFailed {
            submission,
            reason: "offline".into(),
        },
    );

    assert_eq!(state.contact.field(Field::Message), "Hello there!");
}

// ─────────────────────────────────────────────────────────
// Popup auto-dismiss
// ─────────────────────────────────────────────────────────

fn state_with_popup(shown_ago: Duration, auto_dismiss_ms: u64) -> AppState {
    let mut state = filled_state();
    state.settings.popup.auto_dismiss_ms = auto_dismiss_ms;
    let submission = start_submission(&mut state);
    update(&mut state, Message::SubmissionSucceeded { submission });
    state.contact.popup_shown_at = Instant::now().checked_sub(shown_ago);
    state
}

#[test]
fn test_tick_without_auto_dismiss_keeps_popup() {
    let mut state = state_with_popup(Duration::from_secs(60), 0);
    update(&mut state, Message::Tick);
    assert_eq!(state.contact.status, SubmissionStatus::Success);
}

#[test]
fn test_tick_before_deadline_keeps_popup() {
    let mut state = state_with_popup(Duration::ZERO, 60_000);
    update(&mut state, Message::Tick);
    assert_eq!(state.contact.status, SubmissionStatus::Success);
}

#[test]
fn test_tick_after_deadline_dismisses_popup() {
    let mut state = state_with_popup(Duration::from_millis(500), 100);
    update(&mut state, Message::Tick);
    assert_eq!(state.contact.status, SubmissionStatus::Idle);
}

#[test]
fn test_tick_never_touches_submitting() {
    let mut state = filled_state();
    state.settings.popup.auto_dismiss_ms = 1;
    start_submission(&mut state);
    update(&mut state, Message::Tick);
    assert_eq!(state.contact.status, SubmissionStatus::Submitting);
}
