//! JSON response envelopes.

use serde::Serialize;

pub const MSG_ACCEPTED: &str = "Message sent successfully";
pub const MSG_INVALID_INPUT: &str = "Invalid input detected";
pub const MSG_SERVER_ERROR: &str = "An unexpected error occurred. Please try again later.";

/// `{success, message}` envelope for single-message outcomes.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub success: bool,
    pub message: &'static str,
}

impl StatusBody {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: MSG_ACCEPTED,
        }
    }

    pub fn invalid_input() -> Self {
        Self {
            success: false,
            message: MSG_INVALID_INPUT,
        }
    }

    pub fn server_error() -> Self {
        Self {
            success: false,
            message: MSG_SERVER_ERROR,
        }
    }
}

/// `{success, errors}` envelope listing every failed validation rule.
#[derive(Debug, Serialize)]
pub struct ValidationBody {
    pub success: bool,
    pub errors: Vec<String>,
}

impl ValidationBody {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
        }
    }
}
