//! folio-app - Application state and orchestration for Folio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! contact form: messages, the pure `update` function, the submission
//! coordinator, action dispatch to the mail relay, the Engine shared by the
//! TUI and headless runners, and configuration loading.

pub mod actions;
pub mod config;
pub mod contact;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use contact::{ContactForm, Focus};
pub use engine::Engine;
pub use handler::{RelayRequest, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState};
