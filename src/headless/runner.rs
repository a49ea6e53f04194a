//! Headless mode runner - one submission without the TUI
//!
//! Drives the same Engine as the TUI: the form is filled with `SetField`
//! messages, submitted, and the loop waits for the relay outcome while
//! emitting JSON events to stdout.

use tracing::{info, warn};

use folio_app::{message::Message, Engine};
use folio_core::prelude::*;
use folio_core::{Field, FormState, SubmissionStatus};
use folio_relay::MailRelay;

use super::HeadlessEvent;

/// Fill the form with `form`, submit it, and wait for the outcome.
///
/// Returns `Ok(true)` when the relay accepted the message, `Ok(false)` when
/// validation or the relay rejected it.
pub async fn run_headless<R>(engine: &mut Engine<R>, form: FormState) -> Result<bool>
where
    R: MailRelay + Send + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Folio starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    for field in Field::ALL {
        engine.process_message(Message::SetField {
            field,
            value: form.get(field).to_string(),
        });
    }
    engine.process_message(Message::Submit);

    let submission = match (engine.status(), engine.state.contact.in_flight) {
        (SubmissionStatus::Submitting, Some(id)) => id,
        _ => {
            info!(
                "Form rejected locally with {} error(s)",
                engine.state.contact.errors.len()
            );
            HeadlessEvent::validation_failed(&engine.state.contact.errors).emit();
            return Ok(false);
        }
    };
    HeadlessEvent::submitting(submission.0).emit();

    let result = wait_for_outcome(engine).await;

    engine.shutdown();
    info!("Folio headless mode exiting");
    result
}

/// Process messages until the submission leaves `Submitting`
async fn wait_for_outcome<R>(engine: &mut Engine<R>) -> Result<bool>
where
    R: MailRelay + Send + Sync + 'static,
{
    while engine.status().is_submitting() {
        if engine.should_quit() {
            warn!("Quit requested while submission in flight");
            HeadlessEvent::error("interrupted before the relay answered".into(), true).emit();
            return Ok(false);
        }

        let Some(msg) = engine.msg_rx.recv().await else {
            return Err(Error::ChannelClosed);
        };

        // The reason only travels on the message; state keeps the status
        let failure = match &msg {
            Message::SubmissionFailed { submission, reason } => Some((*submission, reason.clone())),
            _ => None,
        };
        let pending = engine.state.contact.in_flight;

        engine.process_message(msg);

        match engine.status() {
            SubmissionStatus::Success => {
                if let Some(id) = pending {
                    HeadlessEvent::submitted(id.0).emit();
                }
                return Ok(true);
            }
            SubmissionStatus::Error => {
                if let Some((id, reason)) = failure {
                    HeadlessEvent::submit_failed(id.0, reason).emit();
                }
                return Ok(false);
            }
            _ => {}
        }
    }

    Ok(false)
}
