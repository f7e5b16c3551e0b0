use std::sync::Arc;

use tracing::{debug, error, info};

use super::calculator::{CalculatorError, MortgageCalculator};
use super::domain::{self, EstimateRequest, EstimateValidationError, MortgageEstimate, RateQuote};
use super::rates::RateCache;

/// Validates estimate inputs and proxies them to the external calculator,
/// plus the hour-cached weekly rate lookup.
///
/// The calculator is optional for the same reason the CRM gateway is: a
/// missing API key degrades to a request-time configuration error.
pub struct MortgageEstimateService<M> {
    calculator: Option<Arc<M>>,
    rates: RateCache,
}

impl<M> MortgageEstimateService<M>
where
    M: MortgageCalculator + 'static,
{
    pub fn new(calculator: Option<Arc<M>>) -> Self {
        Self {
            calculator,
            rates: RateCache::new(),
        }
    }

    /// Validate a request and forward it upstream.
    pub async fn estimate(
        &self,
        request: EstimateRequest,
    ) -> Result<MortgageEstimate, MortgageError> {
        let parameters = domain::parameters_from_request(request)?;
        let calculator = self.calculator()?;

        match calculator.estimate(&parameters).await {
            Ok(estimate) => {
                info!(
                    home_value = parameters.home_value,
                    duration_years = parameters.duration_years,
                    "mortgage estimate computed"
                );
                Ok(estimate)
            }
            Err(err) => {
                match &err {
                    CalculatorError::Rejected { status, body } => {
                        error!(status, body = body.as_str(), "mortgage estimate rejected");
                    }
                    other => error!(error = %other, "mortgage estimate failed"),
                }
                Err(err.into())
            }
        }
    }

    /// Serve the weekly rate quote, from cache when fresh.
    pub async fn current_rates(&self) -> Result<RateQuote, MortgageError> {
        if let Some(quote) = self.rates.get().await {
            debug!("serving weekly rates from cache");
            return Ok(quote);
        }

        let calculator = self.calculator()?;
        match calculator.weekly_rates().await {
            Ok(quote) => {
                self.rates.store(quote.clone()).await;
                Ok(quote)
            }
            Err(err) => {
                match &err {
                    CalculatorError::Rejected { status, body } => {
                        error!(status, body = body.as_str(), "weekly rate fetch rejected");
                    }
                    other => error!(error = %other, "weekly rate fetch failed"),
                }
                Err(err.into())
            }
        }
    }

    fn calculator(&self) -> Result<&Arc<M>, MortgageError> {
        self.calculator.as_ref().ok_or(MortgageError::Unconfigured)
    }
}

/// Error raised by the mortgage service.
#[derive(Debug, thiserror::Error)]
pub enum MortgageError {
    #[error(transparent)]
    Validation(#[from] EstimateValidationError),
    #[error("calculation service key not configured")]
    Unconfigured,
    #[error(transparent)]
    Calculator(#[from] CalculatorError),
}
