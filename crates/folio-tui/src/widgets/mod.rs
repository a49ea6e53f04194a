//! Custom widget components

mod header;
mod key_hints;
pub mod modal_overlay;
mod status_popup;
mod submit_button;
mod text_field;

pub use header::FormHeader;
pub use key_hints::KeyHints;
pub use status_popup::StatusPopup;
pub use submit_button::SubmitButton;
pub use text_field::TextField;
