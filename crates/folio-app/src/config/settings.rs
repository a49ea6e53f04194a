//! Settings loading, environment overrides, and the default config file

use std::path::{Path, PathBuf};

use folio_core::prelude::*;
use folio_relay::RelayOptions;

use super::types::Settings;

const CONFIG_DIR: &str = "folio";
const CONFIG_FILENAME: &str = "config.toml";

pub const ENV_SERVICE_ID: &str = "FOLIO_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "FOLIO_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "FOLIO_PUBLIC_KEY";
pub const ENV_PRIVATE_KEY: &str = "FOLIO_PRIVATE_KEY";

/// `<config_dir>/folio/config.toml`, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from [`default_config_path`] when `None`.
///
/// A missing or unparsable file falls back to defaults with a warning.
/// Environment overrides are applied last.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = path.map(Path::to_path_buf).or_else(default_config_path);

    let mut settings = match config_path {
        Some(config_path) if config_path.exists() => read_settings(&config_path)
            .unwrap_or_else(|e| {
                warn!("{}", e);
                Settings::default()
            }),
        Some(config_path) => {
            debug!("No config file at {:?}, using defaults", config_path);
            Settings::default()
        }
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    };

    apply_env_overrides(&mut settings);
    settings
}

/// Load settings from a file that must exist.
///
/// Used for an explicit `--config` path, where a typo should not silently
/// fall back to defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut settings = read_settings(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {:?}: {}", path, e)))?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {:?}: {}", path, e)))?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Replace relay credentials with non-empty `FOLIO_*` environment values
pub fn apply_env_overrides(settings: &mut Settings) {
    let relay = &mut settings.relay;
    for (var, slot) in [
        (ENV_SERVICE_ID, &mut relay.service_id),
        (ENV_TEMPLATE_ID, &mut relay.template_id),
        (ENV_PUBLIC_KEY, &mut relay.public_key),
        (ENV_PRIVATE_KEY, &mut relay.private_key),
    ] {
        if let Ok(value) = std::env::var(var) {
            if !value.trim().is_empty() {
                debug!("{} overrides config file value", var);
                *slot = value;
            }
        }
    }
}

impl Settings {
    /// Relay client options, once the account identifiers are present.
    ///
    /// The service id always has a default; template id and public key do not.
    pub fn relay_credentials(&self) -> Result<RelayOptions> {
        let relay = &self.relay;

        let mut missing = Vec::new();
        if relay.template_id.trim().is_empty() {
            missing.push("relay.template_id");
        }
        if relay.public_key.trim().is_empty() {
            missing.push("relay.public_key");
        }
        if !missing.is_empty() {
            return Err(Error::config_invalid(format!(
                "missing {} (set it in config.toml or via {} / {})",
                missing.join(", "),
                ENV_TEMPLATE_ID,
                ENV_PUBLIC_KEY
            )));
        }

        if relay.timeout_ms == 0 {
            return Err(Error::config_invalid(
                "relay.timeout_ms must be greater than 0",
            ));
        }

        Ok(RelayOptions::new(relay.public_key.clone())
            .with_private_key(relay.private_key.clone())
            .with_endpoint(relay.endpoint.clone())
            .with_timeout(relay.timeout()))
    }
}

/// Write the commented default config file.
///
/// Existing files are left untouched. Returns the path written (or kept).
pub fn init_config_file(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        info!("Config file already exists at {:?}", path);
        return Ok(path.to_path_buf());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# Folio Configuration

[relay]
service_id = "default_service"
template_id = ""        # or FOLIO_TEMPLATE_ID
public_key = ""         # or FOLIO_PUBLIC_KEY
private_key = ""        # optional, or FOLIO_PRIVATE_KEY
endpoint = "https://api.emailjs.com/api/v1.0/email/send"
timeout_ms = 10000       # must be greater than 0

[popup]
auto_dismiss_ms = 0     # 0 = close with Enter/Esc only

[validation]
email_rule = "standard" # or "loose"

[ui]
title = "Get in touch"
"#;

    std::fs::write(path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Created default config at {:?}", path);

    Ok(path.to_path_buf())
}
