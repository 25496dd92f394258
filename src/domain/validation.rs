//! Field-level validation rules for the contact form.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::submission::ContactForm;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .unwrap_or_else(|e| panic!("email pattern failed to compile: {e}"))
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]{7,15}$")
        .unwrap_or_else(|e| panic!("phone pattern failed to compile: {e}"))
});

/// A single failed validation rule, reported verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameMissing,

    #[error("A valid email address is required")]
    EmailInvalid,

    #[error("Phone number must be 7 to 15 digits, optionally prefixed with +")]
    PhoneInvalid,

    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// Minimum trimmed message length.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Check every rule and collect every failure.
///
/// Pure over the form; the caller decides how to report the errors.
pub fn validate_form(form: &ContactForm) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match form.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => {}
        _ => errors.push(ValidationError::NameMissing),
    }

    match form.email.as_deref().map(str::trim) {
        Some(email) if EMAIL_RE.is_match(email) => {}
        _ => errors.push(ValidationError::EmailInvalid),
    }

    // Phone is optional; an empty string counts as absent.
    if let Some(phone) = form.phone.as_deref().map(str::trim) {
        if !phone.is_empty() && !PHONE_RE.is_match(phone) {
            errors.push(ValidationError::PhoneInvalid);
        }
    }

    match form.message.as_deref().map(str::trim) {
        Some(message) if message.chars().count() >= MIN_MESSAGE_LEN => {}
        _ => errors.push(ValidationError::MessageTooShort),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            phone: Some("+14155550100".into()),
            message: Some("Please contact me about a project.".into()),
        }
    }

    #[test]
    fn accepts_a_well_formed_submission() {
        assert!(validate_form(&valid_form()).is_ok());
    }

    #[test]
    fn phone_is_optional() {
        let mut form = valid_form();
        form.phone = None;
        assert!(validate_form(&form).is_ok());
        form.phone = Some("".into());
        assert!(validate_form(&form).is_ok());
    }

    #[test]
    fn missing_fields_each_produce_an_error() {
        let form = ContactForm::default();
        let errors = validate_form(&form).unwrap_err();
        assert!(errors.contains(&ValidationError::NameMissing));
        assert!(errors.contains(&ValidationError::EmailInvalid));
        assert!(errors.contains(&ValidationError::MessageTooShort));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let mut form = valid_form();
        form.name = Some("   ".into());
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NameMissing]);
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["plainaddress", "missing@tld", "@nouser.com", "two@@at.com"] {
            let mut form = valid_form();
            form.email = Some(email.into());
            let errors = validate_form(&form).unwrap_err();
            assert_eq!(errors, vec![ValidationError::EmailInvalid], "email: {email}");
        }
    }

    #[test]
    fn rejects_malformed_phones() {
        for phone in ["123456", "1234567890123456", "+1-415-555", "abc1234567"] {
            let mut form = valid_form();
            form.phone = Some(phone.into());
            let errors = validate_form(&form).unwrap_err();
            assert_eq!(errors, vec![ValidationError::PhoneInvalid], "phone: {phone}");
        }
    }

    #[test]
    fn accepts_boundary_phone_lengths() {
        for phone in ["1234567", "123456789012345", "+1234567"] {
            let mut form = valid_form();
            form.phone = Some(phone.into());
            assert!(validate_form(&form).is_ok(), "phone: {phone}");
        }
    }

    #[test]
    fn message_shorter_than_minimum_after_trim_is_rejected() {
        let mut form = valid_form();
        form.message = Some("  too short   ".into());
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MessageTooShort]);
    }

    #[test]
    fn message_of_exactly_minimum_length_is_accepted() {
        let mut form = valid_form();
        form.message = Some("a".repeat(MIN_MESSAGE_LEN));
        assert!(validate_form(&form).is_ok());
    }
}
