use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::PropertyLookup;
use super::provider::PropertyProvider;
use super::service::PropertyEnrichmentService;

/// Router builder exposing the property enrichment endpoint.
pub fn property_router<P>(service: Arc<PropertyEnrichmentService<P>>) -> Router
where
    P: PropertyProvider + 'static,
{
    Router::new()
        .route("/property", post(enrich_handler::<P>))
        .with_state(service)
}

pub(crate) async fn enrich_handler<P>(
    State(service): State<Arc<PropertyEnrichmentService<P>>>,
    axum::Json(lookup): axum::Json<PropertyLookup>,
) -> Response
where
    P: PropertyProvider + 'static,
{
    match service.enrich(lookup).await {
        Ok(details) => {
            (StatusCode::OK, axum::Json(json!({ "data": details }))).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
