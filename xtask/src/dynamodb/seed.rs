//! Seed command implementation.

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use contactform_core::storage::attributes::submission_to_item;
use contactform_core::submission::Submission;

use super::error::{DynamodbError, Result};

/// BatchWriteItem accepts at most 25 requests.
const BATCH_SIZE: usize = 25;

const NAMES: [&str; 8] = [
    "Ada", "Grace", "Linus", "Margaret", "Ken", "Barbara", "Dennis", "Frances",
];

const MESSAGES: [&str; 5] = [
    "Loved the talk, are the slides online?",
    "Can we schedule a call next week?",
    "Found a typo on the pricing page.",
    "Do you offer student discounts?",
    "Just saying hi!",
];

/// Generate demo submissions with distinct emails.
pub fn generate_seed_submissions(count: u32) -> Vec<Submission> {
    (0..count as usize)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            Submission::new(
                format!("{}.{}@example.com", name.to_lowercase(), i),
                name,
                MESSAGES[i % MESSAGES.len()],
            )
        })
        .collect()
}

/// Insert submissions into DynamoDB. Returns how many were accepted.
pub async fn seed_submissions(
    client: &Client,
    table_name: &str,
    submissions: &[Submission],
) -> Result<u32> {
    let mut inserted = 0;

    for chunk in submissions.chunks(BATCH_SIZE) {
        let write_requests = chunk
            .iter()
            .map(|submission| {
                let put_request = PutRequest::builder()
                    .set_item(Some(submission_to_item(submission)))
                    .build()
                    .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;
                Ok(WriteRequest::builder().put_request(put_request).build())
            })
            .collect::<Result<Vec<_>>>()?;

        let output = client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(DisplayErrorContext(&e).to_string()))?;

        let unprocessed = output
            .unprocessed_items()
            .and_then(|items| items.get(table_name))
            .map_or(0, |requests| requests.len());

        inserted += chunk.len().saturating_sub(unprocessed) as u32;
    }

    Ok(inserted)
}
