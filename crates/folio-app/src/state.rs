//! Application state (the Model in TEA)

use crate::config::Settings;
use crate::contact::ContactForm;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// The contact form and its submission lifecycle
    pub contact: ContactForm,

    /// Application settings from config file
    pub settings: Settings,

    /// Current application phase
    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            contact: ContactForm::new(),
            settings,
            phase: AppPhase::Running,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
