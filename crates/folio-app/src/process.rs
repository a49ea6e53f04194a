//! Message processing
//!
//! Runs a message through the TEA update function, follows any chained
//! messages, and dispatches the resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use folio_relay::MailRelay;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<R>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    relay: &Arc<R>,
) where
    R: MailRelay + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), relay.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
