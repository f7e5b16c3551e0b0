use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;

async fn post_mortgage(router: axum::Router, body: &Value) -> axum::response::Response {
    router
        .oneshot(
            axum::http::Request::post("/mortgage")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(body).expect("serializable body"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes")
}

#[tokio::test]
async fn mortgage_route_wraps_the_estimate_under_data() {
    let (router, _calculator) = mortgage_router_with(StubCalculator::answering());
    let body = json!({
        "home_value": 350000,
        "interest_rate": 6.5,
        "duration_years": 30,
        "annual_property_tax": 3500,
        "annual_home_insurance": 1200,
    });

    let response = post_mortgage(router, &body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .get("data")
            .and_then(|data| data.get("monthly_payment"))
            .and_then(|monthly| monthly.get("total"))
            .and_then(Value::as_f64),
        Some(2603.87)
    );
    assert_eq!(
        payload
            .get("data")
            .and_then(|data| data.get("total_interest_paid"))
            .and_then(Value::as_f64),
        Some(446_404.0)
    );
}

#[tokio::test]
async fn mortgage_route_rejects_missing_fields() {
    let (router, calculator) = mortgage_router_with(StubCalculator::answering());

    let response = post_mortgage(router, &json!({ "home_value": 350000 })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        json!({ "error": "Missing required fields: interest_rate, duration_years" })
    );
    assert!(calculator.estimate_calls().is_empty());
}

#[tokio::test]
async fn mortgage_route_propagates_upstream_status() {
    let (router, _calculator) = mortgage_router_with(StubCalculator::rejecting(400, "bad params"));
    let body = json!({
        "home_value": 350000,
        "interest_rate": 6.5,
        "duration_years": 30,
    });

    let response = post_mortgage(router, &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "error": "Failed to calculate mortgage" }));
}

#[tokio::test]
async fn mortgage_handler_reports_missing_configuration() {
    let service = Arc::new(unconfigured_service());

    let response = crate::workflows::mortgage::router::estimate_handler::<StubCalculator>(
        State(service),
        axum::Json(estimate_request()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "error": "API configuration error" }));
}

#[tokio::test]
async fn rate_route_serves_the_quote_top_level() {
    let (router, _calculator) = mortgage_router_with(StubCalculator::answering());

    let response = router
        .oneshot(
            axum::http::Request::get("/mortgage-rate")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        json!({ "frm_30": 6.58, "frm_15": 5.93, "week": "2025-06-12" })
    );
}

#[tokio::test]
async fn rate_route_masks_upstream_failures() {
    let (router, _calculator) = mortgage_router_with(StubCalculator::rejecting(502, "down"));

    let response = router
        .oneshot(
            axum::http::Request::get("/mortgage-rate")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!({ "error": "Failed to fetch rate" }));
}
