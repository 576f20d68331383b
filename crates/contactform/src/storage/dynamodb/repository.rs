//! DynamoDB repository implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use contactform_core::storage::attributes::{item_to_json, submission_to_item};
use contactform_core::storage::{Item, Result, SubmissionRepository};
use contactform_core::submission::Submission;

use super::client::shared_client;
use super::error::{map_put_item_error, map_scan_error};
use crate::config::Config;

/// DynamoDB-backed submission store.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a repository on top of the process-wide client.
    pub async fn from_config(config: &Config) -> Self {
        let client = shared_client(config).await.clone();
        Self::new(client, config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl SubmissionRepository for DynamoDbRepository {
    async fn put_submission(&self, submission: &Submission) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(submission_to_item(submission)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn scan_submissions(&self) -> Result<Vec<Item>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        if result.last_evaluated_key.is_some() {
            tracing::warn!(
                table = %self.table_name,
                "Scan result truncated by DynamoDB, returning first page only"
            );
        }

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_json).collect()
    }
}
