use crate::cli::ServeArgs;
use crate::infra::{self, AppState};
use crate::routes::with_workflow_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lead_funnel::config::AppConfig;
use lead_funnel::error::AppError;
use lead_funnel::telemetry;
use lead_funnel::workflows::intake::LeadIntakeService;
use lead_funnel::workflows::mortgage::MortgageEstimateService;
use lead_funnel::workflows::property::PropertyEnrichmentService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if config.integrations.hubspot_token.is_none() {
        warn!("HUBSPOT_TOKEN not set, lead and contact submissions will report a configuration error");
    }
    if config.integrations.api_ninjas_key.is_none() {
        warn!("API_NINJAS_KEY not set, mortgage tools will report a configuration error and property lookups return no data");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let intake_service = Arc::new(LeadIntakeService::new(infra::hubspot_client(
        &config.integrations,
    )));
    let mortgage_service = Arc::new(MortgageEstimateService::new(infra::mortgage_calculator(
        &config.integrations,
    )));
    let property_service = Arc::new(PropertyEnrichmentService::new(infra::property_provider(
        &config.integrations,
    )));

    let app = with_workflow_routes(intake_service, mortgage_service, property_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lead funnel service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Fetches the weekly rate survey once and prints it, for smoke checks
/// without standing up the server.
pub(crate) async fn print_rates() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = MortgageEstimateService::new(infra::mortgage_calculator(&config.integrations));

    let quote = service.current_rates().await?;
    match serde_json::to_string_pretty(&quote) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("rates payload unavailable: {}", err),
    }
    Ok(())
}
