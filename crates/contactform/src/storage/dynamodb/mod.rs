//! DynamoDB storage backend implementation.
//!
//! Stores one item per submission in a table whose hash key is `email`
//! (S). The SDK client is created once per process and shared by every
//! repository.

mod client;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
