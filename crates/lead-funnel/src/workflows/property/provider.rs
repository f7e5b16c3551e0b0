use async_trait::async_trait;
use serde_json::Value;

use crate::workflows::http_client;

const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com";

/// Outbound property-data lookup the enrichment service depends on.
#[async_trait]
pub trait PropertyProvider: Send + Sync {
    /// Fetch the raw property record for an address.
    async fn lookup(&self, address: &str) -> Result<Value, ProviderError>;
}

/// Error enumeration for property-data traffic.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("property service rejected the request: status {0}")]
    Rejected(u16),
    #[error("property service unreachable: {0}")]
    Transport(String),
    #[error("property service returned an unreadable payload: {0}")]
    Payload(String),
}

/// Client for the hosted numeric-data API's property endpoint.
pub struct ApiNinjasProperties {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl ApiNinjasProperties {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: http_client(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl PropertyProvider for ApiNinjasProperties {
    async fn lookup(&self, address: &str) -> Result<Value, ProviderError> {
        let response = self
            .client
            .get(format!("{}/v1/propertydetails", self.base_url))
            .query(&[("address", address)])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Rejected(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|err| ProviderError::Payload(err.to_string()))
    }
}
