//! Contact form model: field values, inline errors, focus, and the
//! submission lifecycle

use std::time::Instant;

use folio_core::{Field, FieldErrors, FormState, SubmissionId, SubmissionStatus};

/// What currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::Name)
    }
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Field(Field::Name),
        Focus::Field(Field::Email),
        Focus::Field(Field::Message),
        Focus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }
}

/// State of the contact form.
///
/// Field writes go through [`ContactForm::set_field`], which also drops the
/// inline error for that field. Status transitions are driven by the handler
/// in `handler::contact`.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub values: FormState,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
    pub focus: Focus,

    /// Submission currently awaiting a relay outcome
    pub in_flight: Option<SubmissionId>,
    last_submission: SubmissionId,

    /// When the outcome popup appeared, for auto-dismiss
    pub popup_shown_at: Option<Instant>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Overwrite a field and clear its inline error, if any.
    ///
    /// Errors on other fields are left as they are until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.clear_field(field);
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        let mut value = self.field(field).to_string();
        value.push(c);
        self.set_field(field, value);
    }

    pub fn pop_char(&mut self, field: Field) {
        let mut value = self.field(field).to_string();
        value.pop();
        self.set_field(field, value);
    }

    pub fn clear_field(&mut self, field: Field) {
        self.set_field(field, String::new());
    }

    /// Empty every field
    pub fn reset(&mut self) {
        self.values.reset();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Allocate the id for a new relay call and mark it in flight
    pub fn begin_submission(&mut self) -> SubmissionId {
        self.last_submission = self.last_submission.next();
        self.in_flight = Some(self.last_submission);
        self.last_submission
    }

    /// True when `submission` is the call the form is waiting on
    pub fn is_current(&self, submission: SubmissionId) -> bool {
        self.status.is_submitting() && self.in_flight == Some(submission)
    }
}
