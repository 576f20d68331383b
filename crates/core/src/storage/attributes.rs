//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! JSON. Shared by the service backend and the seeding task, testable without
//! DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use super::error::RepositoryError;
use super::Item;
use crate::submission::Submission;

/// Convert a Submission to a DynamoDB item.
///
/// Absent fields are written as `NULL`. An absent or non-string key is not
/// filtered here, DynamoDB rejects it.
pub fn submission_to_item(submission: &Submission) -> HashMap<String, AttributeValue> {
    submission
        .to_item()
        .iter()
        .map(|(key, value)| (key.clone(), json_to_attribute(value)))
        .collect()
}

/// Convert a scanned DynamoDB item to JSON, keeping every attribute.
pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> Result<Item, RepositoryError> {
    item.iter()
        .map(|(key, value)| Ok((key.clone(), attribute_to_json(value)?)))
        .collect()
}

/// JSON value to attribute. Numbers become `N`, objects `M`, arrays `L`.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), json_to_attribute(value)))
                .collect(),
        ),
    }
}

/// Attribute to JSON value. Sets become arrays; binary attributes are
/// rejected.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, RepositoryError> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(fields) => fields
            .iter()
            .map(|(key, value)| Ok((key.clone(), attribute_to_json(value)?)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

fn parse_number(n: &str) -> Result<Number, RepositoryError> {
    serde_json::from_str(n)
        .map_err(|_| RepositoryError::InvalidData(format!("Invalid number attribute: {}", n)))
}
