//! Contact form handlers: editing and the submission coordinator

use std::time::Instant;

use folio_core::prelude::*;
use folio_core::{validate_with, SubmissionId, SubmissionStatus};
use folio_relay::TemplateParams;

use crate::contact::Focus;
use crate::state::AppState;

use super::{RelayRequest, UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────
// Editing
// ─────────────────────────────────────────────────────────

pub fn handle_input_char(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(field) = state.contact.focus.field() {
        state.contact.push_char(field, c);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(field) = state.contact.focus.field() {
        state.contact.pop_char(field);
    }
    UpdateResult::none()
}

pub fn handle_clear_field(state: &mut AppState) -> UpdateResult {
    if let Some(field) = state.contact.focus.field() {
        state.contact.clear_field(field);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Submission
// ─────────────────────────────────────────────────────────

/// Validate and, if clean, hand the form to the relay.
///
/// Only an idle form can be submitted: while `Submitting` the control is
/// inert, and an open popup has to be dismissed first.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let form = &mut state.contact;

    if form.status != SubmissionStatus::Idle {
        debug!("Submit ignored while {}", form.status);
        return UpdateResult::none();
    }

    form.errors = validate_with(&form.values, state.settings.validation.email_rule);

    if !form.errors.is_empty() {
        info!(
            "Contact form rejected, invalid fields: {:?}",
            form.errors.fields()
        );
        if let Some(first) = form.errors.fields().first() {
            form.focus = Focus::Field(*first);
        }
        return UpdateResult::none();
    }

    let submission = form.begin_submission();
    form.status = SubmissionStatus::Submitting;
    info!("Submitting contact form {}", submission);

    let relay = &state.settings.relay;
    UpdateResult::action(UpdateAction::SendContactForm {
        submission,
        request: RelayRequest {
            service_id: relay.service_id.clone(),
            template_id: relay.template_id.clone(),
            params: TemplateParams::from_form(&form.values),
        },
    })
}

pub fn handle_submission_succeeded(state: &mut AppState, submission: SubmissionId) -> UpdateResult {
    if !accepts_completion(state, submission) {
        return UpdateResult::none();
    }

    let form = &mut state.contact;
    form.in_flight = None;
    form.status = SubmissionStatus::Success;
    form.reset();
    form.errors.clear();
    form.focus = Focus::default();
    form.popup_shown_at = Some(Instant::now());

    info!("Contact form {} sent", submission);
    UpdateResult::none()
}

pub fn handle_submission_failed(
    state: &mut AppState,
    submission: SubmissionId,
    reason: &str,
) -> UpdateResult {
    if !accepts_completion(state, submission) {
        return UpdateResult::none();
    }

    let form = &mut state.contact;
    form.in_flight = None;
    form.status = SubmissionStatus::Error;
    form.popup_shown_at = Some(Instant::now());

    error!("Contact form {} failed: {}", submission, reason);
    UpdateResult::none()
}

/// Completions are dropped once the app is shutting down, or when they
/// belong to a submission other than the one in flight.
fn accepts_completion(state: &AppState, submission: SubmissionId) -> bool {
    if state.should_quit() {
        debug!("Ignoring completion {} during shutdown", submission);
        return false;
    }
    if !state.contact.is_current(submission) {
        debug!(
            "Ignoring stale completion {} (in flight: {:?}, status: {})",
            submission, state.contact.in_flight, state.contact.status
        );
        return false;
    }
    true
}

/// Close the outcome popup. Form values are left as they are.
pub fn handle_dismiss_popup(state: &mut AppState) -> UpdateResult {
    let form = &mut state.contact;
    if form.status.shows_popup() {
        debug!("Popup dismissed ({})", form.status);
        form.status = SubmissionStatus::Idle;
        form.popup_shown_at = None;
    }
    UpdateResult::none()
}

/// Auto-dismiss the popup once it has been visible for the configured time
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    let Some(after) = state.settings.popup.auto_dismiss() else {
        return UpdateResult::none();
    };

    let form = &state.contact;
    let expired = form.status.shows_popup()
        && form
            .popup_shown_at
            .is_some_and(|shown| shown.elapsed() >= after);

    if expired {
        handle_dismiss_popup(state)
    } else {
        UpdateResult::none()
    }
}
