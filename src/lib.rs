//! Folio Library
//!
//! Terminal contact form for a personal portfolio. Wires configuration, the
//! mail relay client, and the engine together for the TUI and headless
//! frontends.

pub mod headless;

use std::path::Path;
use std::sync::Arc;

use folio_app::config::{self, Settings};
use folio_app::Engine;
use folio_core::prelude::*;
use folio_core::FormState;
use folio_relay::EmailJsRelay;

pub use headless::run_headless;

/// Load settings for this run.
///
/// An explicit path must exist; otherwise the default location is tried and
/// a missing file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => config::load_settings_from(path),
        None => Ok(config::load_settings(None)),
    }
}

/// Initialize the process-wide relay client from `settings`
pub fn connect_relay(settings: &Settings) -> Result<Arc<EmailJsRelay>> {
    let options = settings.relay_credentials()?;
    let relay = folio_relay::init(options)?;
    info!("Mail relay ready at {}", relay.endpoint());
    Ok(relay)
}

fn start(config_path: Option<&Path>) -> Result<Engine<EmailJsRelay>> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    folio_core::logging::init()?;

    let settings = load_config(config_path)?;
    let relay = connect_relay(&settings)?;
    Ok(Engine::new(settings, relay))
}

/// Run the interactive contact form
pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let engine = start(config_path)?;

    let result = folio_tui::run(engine);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Folio exiting");
    result
}

/// Submit `form` once without the TUI; `Ok(false)` means it was not sent
pub async fn submit_headless(config_path: Option<&Path>, form: FormState) -> Result<bool> {
    let mut engine = start(config_path)?;
    run_headless(&mut engine, form).await
}
