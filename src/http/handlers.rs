//! Request handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::{sanitize_form, validate_form, ContactForm};
use crate::http::response::{StatusBody, ValidationBody};
use crate::http::server::AppState;

/// `GET /` health check.
pub async fn greet() -> &'static str {
    "Contact API is running"
}

/// `POST /contact`.
///
/// Single-transition pipeline: Received → Validated → Sanitized → Persisted
/// → Acknowledged, with rejection possible at each of the first three steps.
/// A write failure is reported as 500 and not retried; initial-connection
/// retry belongs to the connector alone.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Response {
    // Received: malformed bodies (bad JSON, object where a string belongs)
    // never reach validation.
    let Json(form) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected unparseable submission body");
            return (StatusCode::BAD_REQUEST, Json(StatusBody::invalid_input())).into_response();
        }
    };

    // Validated: collect every failed rule for the client.
    if let Err(errors) = validate_form(&form) {
        tracing::debug!(count = errors.len(), "Submission failed validation");
        let errors = errors.iter().map(ToString::to_string).collect();
        return (StatusCode::BAD_REQUEST, Json(ValidationBody::new(errors))).into_response();
    }

    // Sanitized: a required field stripped empty rejects the submission.
    let submission = match sanitize_form(&form) {
        Ok(submission) => submission,
        Err(_) => {
            tracing::warn!("Sanitization emptied a required field");
            return (StatusCode::BAD_REQUEST, Json(StatusBody::invalid_input())).into_response();
        }
    };

    // Persisted → Acknowledged.
    match state.store.insert(&submission).await {
        Ok(()) => (StatusCode::CREATED, Json(StatusBody::accepted())).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to persist submission");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusBody::server_error()),
            )
                .into_response()
        }
    }
}
