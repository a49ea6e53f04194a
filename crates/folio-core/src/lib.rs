//! # folio-core - Core Domain Types
//!
//! Foundation crate for Folio. Provides the contact form model, the validator,
//! the submission status machine's states, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Form Model (`form`)
//! - [`Field`] - One of the three named inputs (name, email, message)
//! - [`FormState`] - Current values of the three fields
//! - [`FieldError`] - Why a single field failed validation
//! - [`FieldErrors`] - Field-keyed validation errors
//!
//! ### Validation (`validate`)
//! - [`validate()`] - Pure validator using the standard email rule
//! - [`validate_with()`] - Validator with an explicit [`EmailRule`]
//!
//! ### Submission (`status`)
//! - [`SubmissionStatus`] - `Idle | Submitting | Success | Error`
//! - [`SubmissionId`] - Identifies one relay call so stale completions can be dropped
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod error;
pub mod form;
pub mod logging;
pub mod prelude;
pub mod status;
pub mod validate;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use form::{Field, FieldError, FieldErrors, FormState};
pub use status::{SubmissionId, SubmissionStatus};
pub use validate::{is_valid_email, validate, validate_with, EmailRule};
