//! Table configuration types (Functional Core - pure data).

use contactform_core::storage::DEFAULT_TABLE_NAME;
use contactform_core::submission::KEY_ATTRIBUTE;

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the canonical table configuration for contactform.
/// This is a pure function - no I/O.
///
/// Submissions are keyed by email alone: no sort key, no secondary indexes.
pub fn contactform_table_config() -> TableConfig {
    TableConfig {
        table_name: DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: KEY_ATTRIBUTE.to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_keyed_by_email() {
        let config = contactform_table_config();

        assert_eq!(config.table_name, "ContactSubmissions");
        assert_eq!(config.partition_key.name, "email");
        assert_eq!(config.partition_key.attribute_type, AttributeType::String);
    }

    #[test]
    fn test_with_table_name() {
        let config = contactform_table_config().with_table_name("Staging");
        assert_eq!(config.table_name, "Staging");
    }
}
