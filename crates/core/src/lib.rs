//! Functional core for contactform.
//!
//! Everything in this crate is pure data and pure functions. The service
//! binary owns all I/O and calls into these modules to parse requests, build
//! records and shape responses.

pub mod invocation;
pub mod storage;
pub mod submission;
