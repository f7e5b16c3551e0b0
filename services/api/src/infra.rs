use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use lead_funnel::config::IntegrationConfig;
use lead_funnel::workflows::intake::HubSpotClient;
use lead_funnel::workflows::mortgage::ApiNinjasCalculator;
use lead_funnel::workflows::property::ApiNinjasProperties;
use metrics_exporter_prometheus::PrometheusHandle;

/// Shared handles the operational endpoints read from request extensions.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// CRM client for the intake workflow, present only when the token is set.
pub(crate) fn hubspot_client(config: &IntegrationConfig) -> Option<Arc<HubSpotClient>> {
    config
        .hubspot_token
        .clone()
        .map(|token| Arc::new(HubSpotClient::new(token)))
}

pub(crate) fn mortgage_calculator(config: &IntegrationConfig) -> Option<Arc<ApiNinjasCalculator>> {
    config
        .api_ninjas_key
        .clone()
        .map(|key| Arc::new(ApiNinjasCalculator::new(key)))
}

pub(crate) fn property_provider(config: &IntegrationConfig) -> Option<Arc<ApiNinjasProperties>> {
    config
        .api_ninjas_key
        .clone()
        .map(|key| Arc::new(ApiNinjasProperties::new(key)))
}
