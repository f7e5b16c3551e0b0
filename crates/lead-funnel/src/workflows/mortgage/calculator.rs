use async_trait::async_trait;
use serde_json::Value;

use super::domain::{EstimateParameters, MortgageEstimate, RateQuote};
use crate::workflows::http_client;

const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com";

/// Outbound calculation operations the mortgage service depends on.
#[async_trait]
pub trait MortgageCalculator: Send + Sync {
    /// Compute a full payment breakdown for the given inputs.
    async fn estimate(
        &self,
        parameters: &EstimateParameters,
    ) -> Result<MortgageEstimate, CalculatorError>;

    /// Fetch the latest weekly average rates.
    async fn weekly_rates(&self) -> Result<RateQuote, CalculatorError>;
}

/// Error enumeration for calculator traffic.
#[derive(Debug, thiserror::Error)]
pub enum CalculatorError {
    #[error("calculation service rejected the request: status {status}")]
    Rejected { status: u16, body: String },
    #[error("calculation service unreachable: {0}")]
    Transport(String),
    #[error("calculation service returned an unreadable payload: {0}")]
    Payload(String),
}

/// Client for the hosted numeric-data API's mortgage endpoints.
pub struct ApiNinjasCalculator {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl ApiNinjasCalculator {
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
impl MortgageCalculator for ApiNinjasCalculator {
    async fn estimate(
        &self,
        parameters: &EstimateParameters,
    ) -> Result<MortgageEstimate, CalculatorError> {
        let response = self
            .client
            .get(format!("{}/v1/mortgagecalculator", self.base_url))
            .query(&parameters.query_pairs())
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|err| CalculatorError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CalculatorError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<MortgageEstimate>()
            .await
            .map_err(|err| CalculatorError::Payload(err.to_string()))
    }

    async fn weekly_rates(&self) -> Result<RateQuote, CalculatorError> {
        let response = self
            .client
            .get(format!("{}/v1/mortgagerate", self.base_url))
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(|err| CalculatorError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CalculatorError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| CalculatorError::Payload(err.to_string()))?;

        Ok(RateQuote::from_upstream(&payload))
    }
}
