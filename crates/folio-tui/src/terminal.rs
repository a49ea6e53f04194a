//! Terminal setup and restoration

use folio_core::prelude::*;
use ratatui::DefaultTerminal;

/// Enter raw mode and the alternate screen.
///
/// A partially initialized terminal is restored before the error returns.
pub fn init() -> Result<DefaultTerminal> {
    ratatui::try_init().map_err(|e| {
        ratatui::restore();
        init_error(e)
    })
}

fn init_error(err: std::io::Error) -> Error {
    Error::TerminalInit(err.to_string())
}

/// Install a panic hook that restores the terminal before the report prints
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
