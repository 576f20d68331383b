use serde_json::Value;

use crate::storage::Item;

/// Name of the attribute that keys a submission in the record store.
pub const KEY_ATTRIBUTE: &str = "email";
pub const NAME_ATTRIBUTE: &str = "name";
pub const MESSAGE_ATTRIBUTE: &str = "message";

/// A single contact-form entry, keyed by `email`.
///
/// Fields hold whatever JSON value the form sent, and `None` when the key was
/// missing or `null`. A submission without a usable email cannot be stored,
/// but that is for the store to decide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub email: Option<Value>,
    pub name: Option<Value>,
    pub message: Option<Value>,
}

impl Submission {
    /// Creates a submission with all three fields present as strings.
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(Value::String(email.into())),
            name: Some(Value::String(name.into())),
            message: Some(Value::String(message.into())),
        }
    }

    /// The store key for this submission, if the email is a string.
    pub fn key(&self) -> Option<&str> {
        self.email.as_ref().and_then(Value::as_str)
    }

    /// The record as stored: all three attributes, absent ones as `null`.
    pub fn to_item(&self) -> Item {
        let attr = |value: &Option<Value>| value.clone().unwrap_or(Value::Null);

        let mut item = Item::new();
        item.insert(KEY_ATTRIBUTE.to_string(), attr(&self.email));
        item.insert(NAME_ATTRIBUTE.to_string(), attr(&self.name));
        item.insert(MESSAGE_ATTRIBUTE.to_string(), attr(&self.message));
        item
    }
}

/// Renders a field for display: strings as-is, anything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
