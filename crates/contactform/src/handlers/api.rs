//! Plain HTTP surface for the handlers.
//!
//! The request body is passed to the writer as-is, and the envelope's status
//! code and body become the HTTP response. A body that is not UTF-8 is a
//! writer failure like any other.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use contactform_core::invocation::{InvocationEvent, InvocationResponse};

use crate::{
    handlers::{list_submissions, reject_event, submit_submission},
    state::AppState,
};

/// Save a submission (POST /api/submissions).
pub async fn create_submission(State(state): State<AppState>, body: Bytes) -> Response {
    let envelope = match InvocationEvent::from_body_bytes(&body) {
        Ok(event) => submit_submission(state.submissions.as_ref(), &event).await,
        Err(err) => reject_event("submit", err),
    };
    envelope_to_response(envelope)
}

/// List all submissions (GET /api/submissions).
pub async fn get_submissions(State(state): State<AppState>) -> Response {
    envelope_to_response(list_submissions(state.submissions.as_ref()).await)
}

/// Turn an envelope into an HTTP response with a JSON body.
pub fn envelope_to_response(envelope: InvocationResponse) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        envelope.body,
    )
        .into_response()
}
