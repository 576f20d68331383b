use std::env;

use contactform_core::storage::DEFAULT_TABLE_NAME;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Record store table name (default: "ContactSubmissions")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
    /// Custom DynamoDB endpoint, e.g. a local DynamoDB container.
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub endpoint_url: Option<String>,
    /// AWS region override. Falls back to the SDK default chain.
    #[allow(dead_code)]
    pub region: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CONTACT_TABLE_NAME` - Table name (default: "ContactSubmissions")
    /// - `AWS_ENDPOINT_URL` - DynamoDB endpoint override (default: unset)
    /// - `AWS_REGION` - AWS region (default: SDK default chain)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("CONTACT_TABLE_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            region: env::var("AWS_REGION").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        env::remove_var("CONTACT_TABLE_NAME");
        env::remove_var("AWS_ENDPOINT_URL");
        env::remove_var("AWS_REGION");

        let config = Config::from_env();

        assert_eq!(config.table_name, "ContactSubmissions");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.region, None);
    }
}
