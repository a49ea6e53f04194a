//! Contact form model: the three fields and their validation errors

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three named inputs composing the contact form.
///
/// The lowercase key doubles as the template variable name sent to the
/// mail relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in display (and focus) order
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Stable key used for template variables and log output
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Placeholder shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Enter your name",
            Field::Email => "Enter your email",
            Field::Message => "Type your message here",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current values of the contact form.
///
/// All fields default to the empty string and are overwritten one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Overwrite a single field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Set all three fields back to the empty string
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Why a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// Trimmed value is empty
    Required,
    /// Value does not look like an email address
    InvalidFormat,
}

impl FieldError {
    /// User-facing message for this error on the given field
    pub fn message(&self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, _) => "Name is required",
            (Field::Email, FieldError::Required) => "Email is required",
            (Field::Email, FieldError::InvalidFormat) => "Email is invalid",
            (Field::Message, _) => "Message cannot be empty",
        }
    }
}

/// Field-keyed validation errors.
///
/// A field absent from the map is valid. The map is replaced wholesale on
/// every submit attempt; [`FieldErrors::clear_field`] is the only per-field
/// mutation so editing one input can never clear another input's error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// User-facing message for a field, if it currently has an error
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|e| e.message(field))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Remove the error for one field. Returns whether an entry was removed.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    /// Failing fields in display order
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }
}

impl FromIterator<(Field, FieldError)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, FieldError)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}
