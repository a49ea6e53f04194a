//! Headless mode - JSON event output for scripted submissions
//!
//! Fills the form from command-line values, submits it once, and reports
//! progress on stdout as NDJSON (one event per line). Each event carries an
//! "event" field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"submitting","submission":1,"timestamp":1704700001000}
//! {"event":"submitted","submission":1,"timestamp":1704700001420}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use folio_core::FieldErrors;

pub use runner::run_headless;

/// One inline validation error, keyed by field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The form was rejected locally; nothing was sent
    ValidationFailed {
        errors: Vec<FieldIssue>,
        timestamp: i64,
    },

    /// Relay call started
    Submitting { submission: u64, timestamp: i64 },

    /// Relay accepted the message
    Submitted { submission: u64, timestamp: i64 },

    /// Relay call failed
    SubmitFailed {
        submission: u64,
        error: String,
        timestamp: i64,
    },

    /// Run ended before the submission settled
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn validation_failed(errors: &FieldErrors) -> Self {
        Self::ValidationFailed {
            errors: errors
                .iter()
                .map(|(field, err)| FieldIssue {
                    field: field.key(),
                    message: err.message(field),
                })
                .collect(),
            timestamp: Self::now(),
        }
    }

    pub fn submitting(submission: u64) -> Self {
        Self::Submitting {
            submission,
            timestamp: Self::now(),
        }
    }

    pub fn submitted(submission: u64) -> Self {
        Self::Submitted {
            submission,
            timestamp: Self::now(),
        }
    }

    pub fn submit_failed(submission: u64, error: String) -> Self {
        Self::SubmitFailed {
            submission,
            error,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
