use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::{json, Value};

use super::crm::{CrmError, CrmGateway};
use super::domain::{ContactSubmission, LeadSubmission};
use super::service::{IntakeError, LeadIntakeService};

/// Router builder exposing the two intake form endpoints.
pub fn intake_router<C>(service: Arc<LeadIntakeService<C>>) -> Router
where
    C: CrmGateway + 'static,
{
    Router::new()
        .route("/lead", post(lead_handler::<C>))
        .route("/contact", post(contact_handler::<C>))
        .with_state(service)
}

pub(crate) async fn lead_handler<C>(
    State(service): State<Arc<LeadIntakeService<C>>>,
    axum::Json(submission): axum::Json<LeadSubmission>,
) -> Response
where
    C: CrmGateway + 'static,
{
    match service.submit_lead(submission).await {
        Ok(_) => success_response(),
        Err(IntakeError::Validation(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(IntakeError::Unconfigured) => configuration_error_response(),
        Err(IntakeError::Upstream(CrmError::Rejected { body, .. })) => {
            // Operators get the raw CRM error body back for diagnostics on
            // this endpoint only.
            let details = serde_json::from_str::<Value>(&body).unwrap_or_else(|_| json!({}));
            let payload = json!({ "error": "Failed to submit lead", "details": details });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(IntakeError::Upstream(_)) => {
            let payload = json!({ "error": "Failed to submit lead" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn contact_handler<C>(
    State(service): State<Arc<LeadIntakeService<C>>>,
    axum::Json(submission): axum::Json<ContactSubmission>,
) -> Response
where
    C: CrmGateway + 'static,
{
    match service.submit_contact(submission).await {
        Ok(_) => success_response(),
        Err(IntakeError::Validation(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(IntakeError::Unconfigured) => configuration_error_response(),
        Err(IntakeError::Upstream(_)) => {
            let payload = json!({ "error": "Failed to submit contact form" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Shared success body; honeypot discards return this too, so bots cannot
/// tell a blocked submission from an accepted one.
fn success_response() -> Response {
    (StatusCode::OK, axum::Json(json!({ "success": true }))).into_response()
}

fn configuration_error_response() -> Response {
    let payload = json!({ "error": "Server configuration error" });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
