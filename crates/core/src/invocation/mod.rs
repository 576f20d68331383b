//! Invocation envelope shared by both handlers.
//!
//! A handler takes an [`InvocationEvent`], produces a [`HandlerOutcome`] and
//! returns it as an [`InvocationResponse`] (`{"statusCode", "body"}`).

mod error;
mod types;

pub use error::InvocationError;
pub use types::{
    HandlerOutcome, InvocationEvent, InvocationResponse, STATUS_FAILURE, STATUS_OK,
};
