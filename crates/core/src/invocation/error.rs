use thiserror::Error;

use crate::storage::RepositoryError;

/// Anything that can go wrong while a handler runs.
///
/// Handlers never return this to the caller. It is flattened into
/// [`HandlerOutcome::Failure`](super::HandlerOutcome::Failure) at the top of
/// each handler.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("Request body is missing")]
    MissingBody,
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("Request body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
