//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use contactform_core::storage::{Item, RepositoryError, Result, SubmissionRepository};
use contactform_core::submission::{Submission, KEY_ATTRIBUTE};

/// In-memory submission store.
///
/// Mirrors the record store's rules: the key must be a non-empty string, and
/// a put with an existing key replaces the previous record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<HashMap<String, Item>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn validate_key(submission: &Submission) -> Result<&str> {
    match &submission.email {
        None => Err(RepositoryError::InvalidData(format!(
            "Missing the key {KEY_ATTRIBUTE} in the item"
        ))),
        Some(Value::String(key)) if key.is_empty() => Err(RepositoryError::InvalidData(format!(
            "The key {KEY_ATTRIBUTE} cannot contain an empty string value"
        ))),
        Some(Value::String(key)) => Ok(key),
        Some(_) => Err(RepositoryError::InvalidData(format!(
            "Type mismatch for the key {KEY_ATTRIBUTE}, expected a string"
        ))),
    }
}

#[async_trait]
impl SubmissionRepository for InMemoryRepository {
    async fn put_submission(&self, submission: &Submission) -> Result<()> {
        let key = validate_key(submission)?;

        let mut items = self.items.write().await;
        items.insert(key.to_string(), submission.to_item());
        Ok(())
    }

    async fn scan_submissions(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_scan_empty() {
        let repo = InMemoryRepository::new();
        let result = repo.scan_submissions().await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_put_and_scan() {
        let repo = InMemoryRepository::new();
        let submission = Submission::new("a@x.com", "Alice", "hi");

        repo.put_submission(&submission).await.unwrap();

        let result = repo.scan_submissions().await.unwrap();
        assert_eq!(result, vec![submission.to_item()]);
    }

    #[tokio::test]
    async fn test_put_same_key_overwrites() {
        let repo = InMemoryRepository::new();

        repo.put_submission(&Submission::new("a@x.com", "Alice", "first"))
            .await
            .unwrap();
        repo.put_submission(&Submission::new("a@x.com", "Alicia", "second"))
            .await
            .unwrap();

        let result = repo.scan_submissions().await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["name"], "Alicia");
        assert_eq!(result[0]["message"], "second");
    }

    #[tokio::test]
    async fn test_put_without_key_is_rejected() {
        let repo = InMemoryRepository::new();
        let submission = Submission {
            name: Some(json!("Nobody")),
            ..Default::default()
        };

        let result = repo.put_submission(&submission).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert!(repo.scan_submissions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_with_empty_key_is_rejected() {
        let repo = InMemoryRepository::new();

        let result = repo.put_submission(&Submission::new("", "E", "m")).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert!(repo.scan_submissions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_with_non_string_key_is_rejected() {
        let repo = InMemoryRepository::new();
        let submission = Submission {
            email: Some(json!(7)),
            ..Default::default()
        };

        let result = repo.put_submission(&submission).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_scan_returns_all_distinct_keys() {
        let repo = InMemoryRepository::new();
        for i in 0..5 {
            repo.put_submission(&Submission::new(
                format!("user{i}@x.com"),
                format!("User {i}"),
                "hello",
            ))
            .await
            .unwrap();
        }

        let result = repo.scan_submissions().await.unwrap();

        assert_eq!(result.len(), 5);
        for i in 0..5 {
            let email = format!("user{i}@x.com");
            assert!(result.iter().any(|item| item["email"] == email.as_str()));
        }
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::new();
        let clone = repo.clone();

        clone
            .put_submission(&Submission::new("a@x.com", "Alice", "hi"))
            .await
            .unwrap();

        assert_eq!(repo.scan_submissions().await.unwrap().len(), 1);
    }
}
