use crate::infra::AppState;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use lead_funnel::workflows::intake::{intake_router, CrmGateway, LeadIntakeService};
use lead_funnel::workflows::mortgage::{
    mortgage_router, MortgageCalculator, MortgageEstimateService,
};
use lead_funnel::workflows::property::{
    property_router, PropertyEnrichmentService, PropertyProvider,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Visitor location reflected back from the proxy-injected geo headers.
#[derive(Debug, Serialize)]
pub(crate) struct VisitorLocation {
    pub(crate) city: String,
    pub(crate) region: String,
    pub(crate) country: String,
    pub(crate) latitude: Option<String>,
    pub(crate) longitude: Option<String>,
}

pub(crate) fn with_workflow_routes<C, M, P>(
    intake: Arc<LeadIntakeService<C>>,
    mortgage: Arc<MortgageEstimateService<M>>,
    property: Arc<PropertyEnrichmentService<P>>,
) -> axum::Router
where
    C: CrmGateway + 'static,
    M: MortgageCalculator + 'static,
    P: PropertyProvider + 'static,
{
    intake_router(intake)
        .merge(mortgage_router(mortgage))
        .merge(property_router(property))
        .route("/geo", axum::routing::get(geo_endpoint))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Reports the visitor's approximate location so the frontend can prefill
/// forms. The CDN injects the `x-user-*` headers; defaults cover the agent's
/// home market when the headers are absent.
pub(crate) async fn geo_endpoint(headers: HeaderMap) -> Json<VisitorLocation> {
    Json(VisitorLocation {
        city: header_value(&headers, "x-user-city").unwrap_or_else(|| "Clemson".to_string()),
        region: header_value(&headers, "x-user-region").unwrap_or_else(|| "SC".to_string()),
        country: header_value(&headers, "x-user-country").unwrap_or_else(|| "US".to_string()),
        latitude: header_value(&headers, "x-user-latitude"),
        longitude: header_value(&headers, "x-user-longitude"),
    })
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .filter(|value| !value.is_empty())
}
