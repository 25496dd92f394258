//! Contact submission domain model.
//!
//! # Data Flow
//! ```text
//! raw JSON body
//!     → submission.rs (ContactForm, loosely typed)
//!     → validation.rs (field rules, all errors collected)
//!     → sanitize.rs (strip operator syntax, re-check emptiness)
//!     → ContactSubmission (validated, ready to persist)
//! ```
//!
//! # Design Decisions
//! - Validation and sanitization are pure functions, testable in isolation
//! - Validation reports every failed rule, not just the first
//! - Sanitization runs after validation; a field emptied by sanitization
//!   rejects the whole submission rather than persisting a degraded record

pub mod sanitize;
pub mod submission;
pub mod validation;

pub use sanitize::{sanitize_form, InvalidInput};
pub use submission::{ContactForm, ContactSubmission};
pub use validation::{validate_form, ValidationError};
