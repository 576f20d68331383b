use async_trait::async_trait;

use super::error::Result;
use super::Item;
use crate::submission::Submission;

/// The record store holding contact-form submissions.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Writes a submission keyed by its email, replacing any existing record
    /// with the same key.
    async fn put_submission(&self, submission: &Submission) -> Result<()>;

    /// Returns every record the store yields in a single scan, with all of
    /// its attributes.
    ///
    /// No continuation: if the store truncates the scan, only the first page
    /// is returned.
    async fn scan_submissions(&self) -> Result<Vec<Item>>;
}
