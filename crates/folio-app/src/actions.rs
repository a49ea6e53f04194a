//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

use folio_core::prelude::*;
use folio_core::SubmissionId;
use folio_relay::MailRelay;

use crate::handler::RelayRequest;
use crate::message::Message;
use crate::UpdateAction;

/// Reason reported when a send task ends without an outcome
const ABANDONED_REASON: &str = "submission task ended without reporting an outcome";

/// Execute an action by spawning a background task
pub fn handle_action<R>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, relay: Arc<R>)
where
    R: MailRelay + Send + Sync + 'static,
{
    match action {
        UpdateAction::SendContactForm {
            submission,
            request,
        } => {
            spawn_send(submission, request, msg_tx, relay);
        }
    }
}

/// Run one relay call on a tokio task and report its outcome as a message
pub fn spawn_send<R>(
    submission: SubmissionId,
    request: RelayRequest,
    msg_tx: mpsc::Sender<Message>,
    relay: Arc<R>,
) -> JoinHandle<()>
where
    R: MailRelay + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let guard = SubmissionGuard::new(submission, msg_tx);

        let outcome = relay
            .send(&request.service_id, &request.template_id, &request.params)
            .await;

        let message = match outcome {
            Ok(receipt) => {
                debug!(
                    "Relay receipt for {}: {} {}",
                    submission, receipt.status, receipt.text
                );
                Message::SubmissionSucceeded { submission }
            }
            Err(e) => Message::SubmissionFailed {
                submission,
                reason: e.to_string(),
            },
        };

        guard.report(message).await;
    })
}

/// Makes sure a submission always leaves `Submitting`.
///
/// The send task reports its outcome through [`SubmissionGuard::report`].
/// If the guard is dropped first (the task panicked or returned early),
/// `Drop` posts `SubmissionFailed` instead.
pub struct SubmissionGuard {
    submission: SubmissionId,
    msg_tx: Option<mpsc::Sender<Message>>,
}

impl SubmissionGuard {
    pub fn new(submission: SubmissionId, msg_tx: mpsc::Sender<Message>) -> Self {
        Self {
            submission,
            msg_tx: Some(msg_tx),
        }
    }

    /// Deliver the outcome and disarm the guard
    pub async fn report(mut self, message: Message) {
        if let Some(tx) = self.msg_tx.take() {
            if tx.send(message).await.is_err() {
                debug!(
                    "Outcome for {} dropped, event loop has exited",
                    self.submission
                );
            }
        }
    }
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        let Some(tx) = self.msg_tx.take() else {
            return;
        };

        warn!("{} ended without an outcome, reporting failure", self.submission);
        let message = Message::SubmissionFailed {
            submission: self.submission,
            reason: ABANDONED_REASON.to_string(),
        };

        match tx.try_send(message) {
            Ok(()) => {}
            Err(TrySendError::Full(message)) => {
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    handle.spawn(async move {
                        let _ = tx.send(message).await;
                    });
                } else {
                    error!("Could not report abandoned {}", self.submission);
                }
            }
            Err(TrySendError::Closed(_)) => {
                debug!("Event loop gone, abandoned {} not reported", self.submission);
            }
        }
    }
}
