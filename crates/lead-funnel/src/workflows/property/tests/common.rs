use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::{json, Value};

use crate::workflows::property::provider::{PropertyProvider, ProviderError};
use crate::workflows::property::{property_router, PropertyEnrichmentService, PropertyLookup};

pub(super) fn lookup(address: &str) -> PropertyLookup {
    PropertyLookup {
        address: Some(address.to_string()),
    }
}

pub(super) fn upstream_payload() -> Value {
    json!({
        "bedrooms": 3,
        "bathrooms": 2.5,
        "square_feet": 1800,
        "lot_size": 9147,
        "year_built": 1998,
        "property_type": "Single Family",
        "price": 425000,
    })
}

pub(super) fn build_service(
    provider: StubProvider,
) -> (PropertyEnrichmentService<StubProvider>, Arc<StubProvider>) {
    let provider = Arc::new(provider);
    let service = PropertyEnrichmentService::new(Some(provider.clone()));
    (service, provider)
}

pub(super) fn unconfigured_service() -> PropertyEnrichmentService<StubProvider> {
    PropertyEnrichmentService::new(None)
}

pub(super) fn property_router_with(provider: StubProvider) -> (axum::Router, Arc<StubProvider>) {
    let (service, provider) = build_service(provider);
    (property_router(Arc::new(service)), provider)
}

/// Scriptable in-memory stand-in for the property-data API.
pub(super) struct StubProvider {
    addresses: Arc<Mutex<Vec<String>>>,
    payload: Option<Value>,
}

impl StubProvider {
    /// Every lookup answers with the given payload.
    pub(super) fn returning(payload: Value) -> Self {
        Self {
            addresses: Arc::new(Mutex::new(Vec::new())),
            payload: Some(payload),
        }
    }

    /// Every lookup fails.
    pub(super) fn failing() -> Self {
        Self {
            addresses: Arc::new(Mutex::new(Vec::new())),
            payload: None,
        }
    }

    pub(super) fn addresses(&self) -> Vec<String> {
        self.addresses.lock().expect("provider mutex poisoned").clone()
    }
}

#[async_trait]
impl PropertyProvider for StubProvider {
    async fn lookup(&self, address: &str) -> Result<Value, ProviderError> {
        self.addresses
            .lock()
            .expect("provider mutex poisoned")
            .push(address.to_string());
        match &self.payload {
            Some(payload) => Ok(payload.clone()),
            None => Err(ProviderError::Rejected(502)),
        }
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
