//! The submission writer and reader.
//!
//! Each handler makes exactly one store call and never fails: any error is
//! turned into a 500 envelope carrying the error text.

use std::fmt::Display;

use contactform_core::invocation::{
    HandlerOutcome, InvocationError, InvocationEvent, InvocationResponse,
};
use contactform_core::storage::{RepositoryError, SubmissionRepository};
use contactform_core::submission::{confirmation_body, listing_body, SubmitRequest};

/// Writer: parse the event body, store the submission, confirm by name.
pub async fn submit_submission(
    repo: &dyn SubmissionRepository,
    event: &InvocationEvent,
) -> InvocationResponse {
    let outcome = HandlerOutcome::from_result(try_submit(repo, event).await);
    log_outcome("submit", &outcome);
    outcome.into_response()
}

/// Failure envelope for an event that could not be read at all.
pub fn reject_event(handler: &'static str, err: impl Display) -> InvocationResponse {
    let outcome = HandlerOutcome::Failure(err.to_string());
    log_outcome(handler, &outcome);
    outcome.into_response()
}

/// Reader: scan the store and return every record. The event is ignored.
pub async fn list_submissions(repo: &dyn SubmissionRepository) -> InvocationResponse {
    let outcome = HandlerOutcome::from_result(try_list(repo).await);
    log_outcome("list", &outcome);
    outcome.into_response()
}

async fn try_submit(
    repo: &dyn SubmissionRepository,
    event: &InvocationEvent,
) -> Result<String, InvocationError> {
    let request = SubmitRequest::parse(event.require_body()?)?;
    let submission = request.into_submission();

    repo.put_submission(&submission).await?;

    tracing::info!(
        email = submission.key().unwrap_or_default(),
        "Saved submission"
    );

    Ok(confirmation_body(submission.name.as_ref()))
}

async fn try_list(repo: &dyn SubmissionRepository) -> Result<String, InvocationError> {
    let items = repo.scan_submissions().await?;
    tracing::debug!(count = items.len(), "Scanned submissions");
    let body = listing_body(&items)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
    Ok(body)
}

fn log_outcome(handler: &'static str, outcome: &HandlerOutcome) {
    if let HandlerOutcome::Failure(message) = outcome {
        tracing::error!(handler, error = %message, "Handler failed");
    }
}
