use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::calculator::{CalculatorError, MortgageCalculator};
use super::domain::EstimateRequest;
use super::service::{MortgageError, MortgageEstimateService};

/// Router builder exposing the mortgage estimate and weekly-rate endpoints.
pub fn mortgage_router<M>(service: Arc<MortgageEstimateService<M>>) -> Router
where
    M: MortgageCalculator + 'static,
{
    Router::new()
        .route("/mortgage", post(estimate_handler::<M>))
        .route("/mortgage-rate", get(rates_handler::<M>))
        .with_state(service)
}

pub(crate) async fn estimate_handler<M>(
    State(service): State<Arc<MortgageEstimateService<M>>>,
    axum::Json(request): axum::Json<EstimateRequest>,
) -> Response
where
    M: MortgageCalculator + 'static,
{
    match service.estimate(request).await {
        Ok(estimate) => {
            (StatusCode::OK, axum::Json(json!({ "data": estimate }))).into_response()
        }
        Err(MortgageError::Validation(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(MortgageError::Unconfigured) => configuration_error_response(),
        Err(MortgageError::Calculator(CalculatorError::Rejected { status, .. })) => {
            // The upstream status comes back verbatim so the widget can
            // distinguish a bad request from an outage.
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let payload = json!({ "error": "Failed to calculate mortgage" });
            (status, axum::Json(payload)).into_response()
        }
        Err(MortgageError::Calculator(_)) => {
            let payload = json!({ "error": "Failed to calculate mortgage" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn rates_handler<M>(
    State(service): State<Arc<MortgageEstimateService<M>>>,
) -> Response
where
    M: MortgageCalculator + 'static,
{
    match service.current_rates().await {
        Ok(quote) => (StatusCode::OK, axum::Json(quote)).into_response(),
        Err(MortgageError::Unconfigured) => configuration_error_response(),
        Err(_) => {
            let payload = json!({ "error": "Failed to fetch rate" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn configuration_error_response() -> Response {
    let payload = json!({ "error": "API configuration error" });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
