//! Relay trait and the data that crosses it

use std::collections::BTreeMap;

use folio_core::{Field, FormState};
use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// Template variables handed to the provider.
///
/// Keys are the template variable names. For the contact form these are
/// exactly `name`, `email`, and `message`, carrying the raw field values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateParams(BTreeMap<String, String>);

impl TemplateParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map every form field to its template variable.
    ///
    /// Values are passed through untrimmed; validation has already run.
    pub fn from_form(form: &FormState) -> Self {
        Field::ALL
            .iter()
            .map(|field| (field.key().to_string(), form.get(*field).to_string()))
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for TemplateParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&FormState> for TemplateParams {
    fn from(form: &FormState) -> Self {
        Self::from_form(form)
    }
}

/// Provider acknowledgement of an accepted send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReceipt {
    /// HTTP status of the accepted request
    pub status: u16,
    /// Response body as returned by the provider (EmailJS answers `OK`)
    pub text: String,
}

impl RelayReceipt {
    pub fn ok() -> Self {
        Self {
            status: 200,
            text: "OK".to_string(),
        }
    }
}

/// The outbound email boundary.
///
/// One call is one attempt: implementations do not retry. A returned
/// `Ok` means the provider accepted the message for delivery.
#[trait_variant::make(MailRelay: Send)]
pub trait LocalMailRelay {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<RelayReceipt, RelayError>;
}
