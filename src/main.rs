//! Folio - terminal contact form for a personal portfolio
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use folio_app::config::{default_config_path, init_config_file};
use folio_core::prelude::*;
use folio_core::FormState;

/// Folio - send a message from the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Terminal contact form for a personal portfolio", long_about = None)]
struct Args {
    /// Config file (defaults to <config dir>/folio/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Submit once without the TUI and print JSON events
    #[arg(long)]
    headless: bool,

    /// Sender name (headless mode)
    #[arg(long, default_value = "")]
    name: String,

    /// Sender email (headless mode)
    #[arg(long, default_value = "")]
    email: String,

    /// Message body (headless mode)
    #[arg(long, default_value = "")]
    message: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let Some(path) = args.config.clone().or_else(default_config_path) else {
            eprintln!("❌ No config directory on this platform; pass --config PATH");
            std::process::exit(1);
        };
        let written = init_config_file(&path)?;
        eprintln!("✅ Config file: {}", written.display());
        return Ok(());
    }

    if args.headless {
        let form = FormState::new(args.name, args.email, args.message);
        let sent = folio::submit_headless(args.config.as_deref(), form).await?;
        if !sent {
            std::process::exit(1);
        }
        return Ok(());
    }

    folio::run(args.config.as_deref()).await
}
