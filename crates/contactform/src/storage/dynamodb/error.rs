//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `contactform_core::storage`.
//! The SDK's own message is always kept in the mapped error.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use contactform_core::storage::RepositoryError;

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(connection_error) = connection_failure(&err) {
        return connection_error;
    }

    let err = err.into_service_error();
    let context = DisplayErrorContext(&err).to_string();
    match err {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed(format!("Table not found: {}", context))
        }
        PutItemError::ProvisionedThroughputExceededException(_)
        | PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed(format!("Throughput exceeded: {}", context))
        }
        _ => RepositoryError::QueryFailed(format!("PutItem failed: {}", context)),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(connection_error) = connection_failure(&err) {
        return connection_error;
    }

    let err = err.into_service_error();
    let context = DisplayErrorContext(&err).to_string();
    match err {
        ScanError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed(format!("Table not found: {}", context))
        }
        ScanError::ProvisionedThroughputExceededException(_)
        | ScanError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed(format!("Throughput exceeded: {}", context))
        }
        _ => RepositoryError::QueryFailed(format!("Scan failed: {}", context)),
    }
}

/// Requests that never reached DynamoDB.
fn connection_failure<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError>
where
    E: std::error::Error + 'static,
    R: Debug,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(
            RepositoryError::ConnectionFailed(DisplayErrorContext(err).to_string()),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::ResourceNotFoundException;

    #[test]
    fn test_put_item_error_keeps_sdk_message() {
        let service_error = PutItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Requested resource not found: Table: ContactSubmissions not found")
                .build(),
        );
        let err: SdkError<PutItemError, ()> = SdkError::service_error(service_error, ());

        let RepositoryError::QueryFailed(message) = map_put_item_error(err) else {
            panic!("expected QueryFailed");
        };
        assert!(message.starts_with("Table not found"));
        assert!(message.contains("ContactSubmissions not found"));
    }

    #[test]
    fn test_scan_error_keeps_sdk_message() {
        let service_error = ScanError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Cannot do operations on a non-existent table")
                .build(),
        );
        let err: SdkError<ScanError, ()> = SdkError::service_error(service_error, ());

        let RepositoryError::QueryFailed(message) = map_scan_error(err) else {
            panic!("expected QueryFailed");
        };
        assert!(message.contains("non-existent table"));
    }
}
