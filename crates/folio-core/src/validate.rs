//! Contact form validation
//!
//! Validation is a pure function of the form values: every field is checked
//! independently and the result holds one entry per failing field. An empty
//! [`FieldErrors`] is the signal to proceed with submission.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::form::{Field, FieldError, FieldErrors, FormState};

/// `local @ domain . tld`, each part a run of non-whitespace, non-`@` chars.
static STANDARD_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Unanchored `\S+@\S+\.\S+`; accepts anything that contains such a run.
static LOOSE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

/// How strictly the email field is checked once it is non-empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailRule {
    /// Whole value must be `local@domain.tld` with no whitespace and a single `@`
    #[default]
    Standard,
    /// Value must merely contain `something@something.something`
    Loose,
}

impl EmailRule {
    fn pattern(&self) -> &'static Regex {
        match self {
            EmailRule::Standard => &STANDARD_EMAIL,
            EmailRule::Loose => &LOOSE_EMAIL,
        }
    }
}

/// Check an email address against a rule. The value is trimmed first.
pub fn is_valid_email(value: &str, rule: EmailRule) -> bool {
    rule.pattern().is_match(value.trim())
}

/// Validate the form with [`EmailRule::Standard`]
pub fn validate(state: &FormState) -> FieldErrors {
    validate_with(state, EmailRule::Standard)
}

/// Validate the form with an explicit email rule
pub fn validate_with(state: &FormState, rule: EmailRule) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if state.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::Required);
    }

    if state.email.trim().is_empty() {
        errors.insert(Field::Email, FieldError::Required);
    } else if !is_valid_email(&state.email, rule) {
        errors.insert(Field::Email, FieldError::InvalidFormat);
    }

    if state.message.trim().is_empty() {
        errors.insert(Field::Message, FieldError::Required);
    }

    errors
}
