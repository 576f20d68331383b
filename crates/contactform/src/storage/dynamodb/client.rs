//! Process-wide DynamoDB client.

use aws_sdk_dynamodb::Client;
use tokio::sync::OnceCell;

use crate::config::Config;

static CLIENT: OnceCell<Client> = OnceCell::const_new();

/// Returns the shared DynamoDB client, creating it on first use.
///
/// The configuration of the first caller wins. The client lives until the
/// process exits.
pub async fn shared_client(config: &Config) -> &'static Client {
    CLIENT.get_or_init(|| build_client(config)).await
}

async fn build_client(config: &Config) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;

    tracing::info!(
        endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
        region = ?sdk_config.region(),
        "Initialized DynamoDB client"
    );

    Client::new(&sdk_config)
}
