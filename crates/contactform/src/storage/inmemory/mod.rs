//! In-memory storage backend.
//!
//! Keeps submissions in a `HashMap` wrapped in `Arc<RwLock<_>>`. Useful for
//! tests and local development where persistence is not required.

mod repository;

pub use repository::InMemoryRepository;
