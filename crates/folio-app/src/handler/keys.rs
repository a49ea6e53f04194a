//! Key event handlers for the contact form and its outcome popup

use crate::contact::Focus;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.contact.status.shows_popup() {
        handle_key_popup(key)
    } else {
        handle_key_form(state, key)
    }
}

/// The popup is modal: it only closes, or the app quits
fn handle_key_popup(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissPopup),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.contact.focus;

    match key {
        InputKey::CharCtrl('c') | InputKey::Esc => Some(Message::Quit),

        // Submit from anywhere in the form
        InputKey::CharCtrl('s') => Some(Message::Submit),

        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),

        InputKey::Enter => match focus {
            Focus::Submit => Some(Message::Submit),
            _ => Some(Message::FocusNext),
        },

        InputKey::AltEnter => match focus {
            Focus::Field(folio_core::Field::Message) => Some(Message::InputChar('\n')),
            _ => None,
        },

        // Character input only applies to fields
        InputKey::Char(c) => focus.field().map(|_| Message::InputChar(c)),
        InputKey::Backspace => focus.field().map(|_| Message::Backspace),
        InputKey::CharCtrl('u') => focus.field().map(|_| Message::ClearField),

        _ => None,
    }
}
