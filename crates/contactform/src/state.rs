//! Application state.
//!
//! Holds the record store behind a trait object so handlers do not care which
//! backend was compiled in.

use std::sync::Arc;

use contactform_core::storage::SubmissionRepository;

use crate::config::Config;

/// Shared application state, cloned into each request handler.
#[derive(Clone)]
pub struct AppState {
    /// The record store.
    pub submissions: Arc<dyn SubmissionRepository>,
}

impl AppState {
    /// Creates state around an existing repository.
    pub fn new(submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self { submissions }
    }

    /// Creates state backed by the compiled-in storage backend.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(_config: &Config) -> Self {
        tracing::info!("Using in-memory storage, submissions are lost on restart");
        Self::new(Arc::new(crate::storage::InMemoryRepository::new()))
    }

    /// Creates state backed by the compiled-in storage backend.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> Self {
        let repo = crate::storage::DynamoDbRepository::from_config(config).await;
        tracing::info!(table = repo.table_name(), "Using DynamoDB storage");
        Self::new(Arc::new(repo))
    }
}

#[cfg(feature = "inmemory")]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(crate::storage::InMemoryRepository::new()))
    }
}
