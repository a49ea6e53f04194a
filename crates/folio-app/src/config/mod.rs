//! Configuration file parsing for Folio
//!
//! Supports:
//! - `<config_dir>/folio/config.toml` - Relay account, popup, validation, UI
//! - `--config PATH` - Explicit config file
//! - `FOLIO_*` environment variables - Relay credential overrides

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, default_config_path, init_config_file, load_settings, load_settings_from,
    ENV_PRIVATE_KEY, ENV_PUBLIC_KEY, ENV_SERVICE_ID, ENV_TEMPLATE_ID,
};
pub use types::*;
