//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, and the injected mail
//! relay. Frontends feed it messages and read `state` back for rendering or
//! event output.

use std::sync::Arc;

use tokio::sync::mpsc;

use folio_core::prelude::*;
use folio_core::SubmissionStatus;
use folio_relay::MailRelay;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppPhase, AppState};

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Folio.
///
/// Generic over the relay so tests can inject a fake while the binary uses
/// the EmailJS client.
pub struct Engine<R> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, send tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    relay: Arc<R>,
}

impl<R> Engine<R>
where
    R: MailRelay + Send + Sync + 'static,
{
    /// Create an engine with loaded settings and an initialized relay.
    ///
    /// Must be called inside a tokio runtime: spawns the OS signal handler.
    pub fn new(settings: Settings, relay: Arc<R>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        info!(
            "Engine ready (service: {}, template: {}, email rule: {:?})",
            settings.relay.service_id, settings.relay.template_id, settings.validation.email_rule
        );

        Self {
            state: AppState::with_settings(settings),
            msg_tx,
            msg_rx,
            relay,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.contact.status
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.relay);
    }

    /// Process every message already queued, without waiting
    pub fn drain_pending(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
        }
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn step(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Enter the quitting phase.
    ///
    /// An in-flight submission is not cancelled; its outcome is ignored.
    pub fn shutdown(&mut self) {
        if self.state.contact.status.is_submitting() {
            warn!(
                "Shutting down with submission {:?} in flight",
                self.state.contact.in_flight
            );
        }
        self.state.phase = AppPhase::Quitting;
        info!("Engine shut down");
    }
}
