//! Record store abstraction.

#[cfg(feature = "dynamodb")]
pub mod attributes;
mod error;
mod traits;

pub use error::{RepositoryError, Result};
pub use traits::SubmissionRepository;

/// Table holding the submissions unless configured otherwise.
pub const DEFAULT_TABLE_NAME: &str = "ContactSubmissions";

/// A stored record as the store hands it back, attribute name to value.
pub type Item = serde_json::Map<String, serde_json::Value>;
