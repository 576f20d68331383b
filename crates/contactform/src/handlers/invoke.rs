//! Invocation-style endpoints.
//!
//! These accept an invocation event and answer with the full envelope
//! (`{"statusCode", "body"}`) as JSON, always with HTTP 200. The envelope's
//! own status code tells the caller whether the handler succeeded.

use axum::{body::Bytes, extract::State, Json};

use contactform_core::invocation::{InvocationEvent, InvocationResponse};

use crate::{
    handlers::{list_submissions, reject_event, submit_submission},
    state::AppState,
};

/// POST /invoke/submit - run the writer with the posted event.
pub async fn invoke_submit(
    State(state): State<AppState>,
    raw_event: Bytes,
) -> Json<InvocationResponse> {
    Json(run_submit(&state, &raw_event).await)
}

/// POST /invoke/list - run the reader. The posted event is ignored.
pub async fn invoke_list(State(state): State<AppState>) -> Json<InvocationResponse> {
    Json(list_submissions(state.submissions.as_ref()).await)
}

/// Parse a raw event and run the writer. An unreadable event is reported the
/// same way as any other writer failure.
pub async fn run_submit(state: &AppState, raw_event: &[u8]) -> InvocationResponse {
    match InvocationEvent::parse(raw_event) {
        Ok(event) => submit_submission(state.submissions.as_ref(), &event).await,
        Err(err) => reject_event("submit", err),
    }
}
