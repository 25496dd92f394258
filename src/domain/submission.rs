//! Submission types: the raw form as posted, and the validated record as
//! stored.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// A contact form exactly as the client posted it.
///
/// Every field is optional here so that missing fields surface as validation
/// errors instead of deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

/// A validated, sanitized submission as persisted to the document store.
///
/// Invariant: `name`, `email` and `message` are non-empty. Constructed only
/// by [`crate::domain::sanitize_form`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,

    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub message: String,

    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime,
}
