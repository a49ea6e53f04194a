//! folio-tui - Terminal UI for Folio
//!
//! This crate provides the ratatui-based terminal interface. It drives an
//! Engine from folio-app and adds terminal rendering, event polling, and the
//! contact form widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
