//! Writer request payload.
//!
//! The writer receives the form as a JSON string. Any of the three keys may
//! be missing; a missing key and an explicit `null` both mean "absent".

use serde_json::{Map, Value};

use super::types::{Submission, KEY_ATTRIBUTE, MESSAGE_ATTRIBUTE, NAME_ATTRIBUTE};
use crate::invocation::InvocationError;

/// Fields the writer reads out of the request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub message: Option<Value>,
}

impl SubmitRequest {
    /// Parse a request body.
    ///
    /// The body has to be a JSON object. Field values are taken as they are,
    /// whatever their JSON type; other keys are ignored.
    pub fn parse(body: &str) -> Result<Self, InvocationError> {
        let Value::Object(mut fields) = serde_json::from_str::<Value>(body)? else {
            return Err(InvocationError::NotAnObject);
        };

        Ok(Self {
            name: take_field(&mut fields, NAME_ATTRIBUTE),
            email: take_field(&mut fields, KEY_ATTRIBUTE),
            message: take_field(&mut fields, MESSAGE_ATTRIBUTE),
        })
    }

    /// Convert into the record the store will hold.
    pub fn into_submission(self) -> Submission {
        Submission {
            email: self.email,
            name: self.name,
            message: self.message,
        }
    }
}

fn take_field(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(|value| !value.is_null())
}
