//! TUI runner - terminal lifecycle and the main event loop

use folio_app::Engine;
use folio_core::prelude::*;
use folio_relay::MailRelay;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the contact form in the terminal until the user quits.
///
/// Must be called from inside a tokio runtime: relay calls are spawned onto
/// it while this loop blocks on terminal input.
pub fn run<R>(mut engine: Engine<R>) -> Result<()>
where
    R: MailRelay + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI exited with error: {}", e);
    }
    result
}

fn run_loop<R>(term: &mut DefaultTerminal, engine: &mut Engine<R>) -> Result<()>
where
    R: MailRelay + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Outcomes from relay tasks and signals
        engine.drain_pending();

        term.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quit requested");
    Ok(())
}
