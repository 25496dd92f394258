//! Sanitization of validated form fields.
//!
//! MongoDB treats `$`-prefixed keys and embedded documents as query
//! operators. Typed deserialization already guarantees the fields are
//! strings, so the remaining risk is operator syntax smuggled inside a
//! string. Stripping `$`, `{` and `}` (plus control characters) leaves
//! nothing the storage layer could misread.

use mongodb::bson::DateTime;
use thiserror::Error;

use crate::domain::submission::{ContactForm, ContactSubmission};

/// Rejection raised when sanitization strips a required field down to
/// nothing. Unreachable for operator-free input that already passed
/// validation, but kept so a degraded record can never be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input detected")]
pub struct InvalidInput;

/// Remove operator syntax and control characters, then trim.
pub fn sanitize_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(*c, '$' | '{' | '}') && !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Build the persistable record from a form that passed validation.
///
/// Assigns the server-side timestamp and re-checks that no required field
/// was emptied by sanitization.
pub fn sanitize_form(form: &ContactForm) -> Result<ContactSubmission, InvalidInput> {
    let name = sanitize_text(form.name.as_deref().unwrap_or(""));
    let email = sanitize_text(form.email.as_deref().unwrap_or("")).to_lowercase();
    let message = sanitize_text(form.message.as_deref().unwrap_or(""));

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(InvalidInput);
    }

    let phone = form
        .phone
        .as_deref()
        .map(sanitize_text)
        .filter(|p| !p.is_empty());

    Ok(ContactSubmission {
        name,
        email,
        phone,
        message,
        submitted_at: DateTime::now(),
    })
}
