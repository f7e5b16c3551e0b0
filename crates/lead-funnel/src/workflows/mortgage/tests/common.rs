use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::mortgage::calculator::{CalculatorError, MortgageCalculator};
use crate::workflows::mortgage::domain::{
    EstimateParameters, EstimateRequest, MortgageEstimate, PaymentBreakdown, RateQuote,
};
use crate::workflows::mortgage::{mortgage_router, MortgageEstimateService};

pub(super) fn estimate_request() -> EstimateRequest {
    EstimateRequest {
        home_value: Some(350_000.0),
        interest_rate: Some(6.5),
        duration_years: Some(30),
        annual_property_tax: Some(3_500.0),
        annual_home_insurance: Some(1_200.0),
        ..EstimateRequest::default()
    }
}

/// Breakdown the stub calculator answers with. The annual insurance figure
/// deliberately differs from monthly x 12; the upstream bills some charges
/// on their own calendar.
pub(super) fn fixture_estimate() -> MortgageEstimate {
    MortgageEstimate {
        monthly_payment: PaymentBreakdown {
            mortgage: 2212.24,
            property_tax: 291.67,
            hoa: 0.0,
            home_insurance: 99.96,
            total: 2603.87,
        },
        annual_payment: PaymentBreakdown {
            mortgage: 26546.88,
            property_tax: 3500.0,
            hoa: 0.0,
            home_insurance: 1200.0,
            total: 31246.88,
        },
        total_interest_paid: 446_404.0,
    }
}

pub(super) fn fixture_quote() -> RateQuote {
    RateQuote {
        frm_30: Some(6.58),
        frm_15: Some(5.93),
        week: Some("2025-06-12".to_string()),
    }
}

pub(super) fn build_service(
    calculator: StubCalculator,
) -> (MortgageEstimateService<StubCalculator>, Arc<StubCalculator>) {
    let calculator = Arc::new(calculator);
    let service = MortgageEstimateService::new(Some(calculator.clone()));
    (service, calculator)
}

pub(super) fn unconfigured_service() -> MortgageEstimateService<StubCalculator> {
    MortgageEstimateService::new(None)
}

pub(super) fn mortgage_router_with(
    calculator: StubCalculator,
) -> (axum::Router, Arc<StubCalculator>) {
    let (service, calculator) = build_service(calculator);
    (mortgage_router(Arc::new(service)), calculator)
}

/// Scriptable in-memory stand-in for the calculation API.
pub(super) struct StubCalculator {
    estimate_calls: Arc<Mutex<Vec<EstimateParameters>>>,
    rate_calls: Arc<Mutex<u32>>,
    rejection: Option<(u16, String)>,
}

impl StubCalculator {
    /// Every call answers with the fixture payloads.
    pub(super) fn answering() -> Self {
        Self {
            estimate_calls: Arc::new(Mutex::new(Vec::new())),
            rate_calls: Arc::new(Mutex::new(0)),
            rejection: None,
        }
    }

    /// Every call fails with the given status and body.
    pub(super) fn rejecting(status: u16, body: &str) -> Self {
        Self {
            rejection: Some((status, body.to_string())),
            ..Self::answering()
        }
    }

    pub(super) fn estimate_calls(&self) -> Vec<EstimateParameters> {
        self.estimate_calls
            .lock()
            .expect("calculator mutex poisoned")
            .clone()
    }

    pub(super) fn rate_call_count(&self) -> u32 {
        *self.rate_calls.lock().expect("calculator mutex poisoned")
    }
}

#[async_trait]
impl MortgageCalculator for StubCalculator {
    async fn estimate(
        &self,
        parameters: &EstimateParameters,
    ) -> Result<MortgageEstimate, CalculatorError> {
        self.estimate_calls
            .lock()
            .expect("calculator mutex poisoned")
            .push(parameters.clone());
        if let Some((status, body)) = &self.rejection {
            return Err(CalculatorError::Rejected {
                status: *status,
                body: body.clone(),
            });
        }
        Ok(fixture_estimate())
    }

    async fn weekly_rates(&self) -> Result<RateQuote, CalculatorError> {
        *self.rate_calls.lock().expect("calculator mutex poisoned") += 1;
        if let Some((status, body)) = &self.rejection {
            return Err(CalculatorError::Rejected {
                status: *status,
                body: body.clone(),
            });
        }
        Ok(fixture_quote())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
