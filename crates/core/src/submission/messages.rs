//! Response bodies produced by the submission handlers.

use serde_json::{json, Value};

use super::types::display_value;
use crate::storage::Item;

/// How an absent name is rendered in the confirmation message.
pub const ABSENT_NAME: &str = "None";

/// Confirmation text returned after a successful write.
pub fn confirmation_message(name: Option<&Value>) -> String {
    let name = name.map_or_else(|| ABSENT_NAME.to_string(), display_value);
    format!("Hi {}, your message has been saved!", name)
}

/// JSON body returned by the writer on success.
pub fn confirmation_body(name: Option<&Value>) -> String {
    json!({ "message": confirmation_message(name) }).to_string()
}

/// JSON body returned by the reader on success.
pub fn listing_body(items: &[Item]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}
