use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::intake::crm::{CreateOutcome, CrmError, CrmGateway};
use crate::workflows::intake::domain::{
    ContactId, ContactProperties, ContactSubmission, LeadSubmission,
};
use crate::workflows::intake::{intake_router, LeadIntakeService};

pub(super) fn lead_submission() -> LeadSubmission {
    LeadSubmission {
        address: Some("123 Main St".to_string()),
        first_name: Some("Avery".to_string()),
        email: Some("avery@example.com".to_string()),
        phone: Some("(864) 555-1234".to_string()),
        property_type: Some("single-family".to_string()),
        selling_timeline: Some("asap".to_string()),
        relationship: Some("homeowner".to_string()),
        ..LeadSubmission::default()
    }
}

pub(super) fn contact_submission() -> ContactSubmission {
    ContactSubmission {
        first_name: Some("Avery".to_string()),
        last_name: Some("Jones".to_string()),
        email: Some("avery@example.com".to_string()),
        phone: Some("8645551234".to_string()),
        message: Some("Thinking about selling next spring.".to_string()),
        website: None,
    }
}

pub(super) fn build_service(
    crm: RecordingCrm,
) -> (LeadIntakeService<RecordingCrm>, Arc<RecordingCrm>) {
    let crm = Arc::new(crm);
    let service = LeadIntakeService::new(Some(crm.clone()));
    (service, crm)
}

pub(super) fn unconfigured_service() -> LeadIntakeService<RecordingCrm> {
    LeadIntakeService::new(None)
}

pub(super) fn intake_router_with(crm: RecordingCrm) -> (axum::Router, Arc<RecordingCrm>) {
    let (service, crm) = build_service(crm);
    (intake_router(Arc::new(service)), crm)
}

/// Every CRM call an intake test triggered, in order.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum CrmCall {
    Create(ContactProperties),
    Find(String),
    Update(ContactId, ContactProperties),
}

/// Scriptable in-memory stand-in for the contacts API.
#[derive(Default)]
pub(super) struct RecordingCrm {
    calls: Arc<Mutex<Vec<CrmCall>>>,
    conflicts: bool,
    rejection: Option<(u16, String)>,
    found_id: Option<String>,
    search_fails: bool,
    update_fails: bool,
}

impl RecordingCrm {
    /// Every create succeeds with a fresh contact.
    pub(super) fn creating() -> Self {
        Self::default()
    }

    /// Creates conflict and the follow-up search resolves to `found_id`.
    pub(super) fn conflicting(found_id: &str) -> Self {
        Self {
            conflicts: true,
            found_id: Some(found_id.to_string()),
            ..Self::default()
        }
    }

    /// Creates conflict but the search comes back empty.
    pub(super) fn missing_from_search() -> Self {
        Self {
            conflicts: true,
            ..Self::default()
        }
    }

    /// Creates fail outright with the given status and body.
    pub(super) fn rejecting(status: u16, body: &str) -> Self {
        Self {
            rejection: Some((status, body.to_string())),
            ..Self::default()
        }
    }

    pub(super) fn with_search_failure(mut self) -> Self {
        self.search_fails = true;
        self
    }

    pub(super) fn with_update_failure(mut self) -> Self {
        self.update_fails = true;
        self
    }

    pub(super) fn calls(&self) -> Vec<CrmCall> {
        self.calls.lock().expect("crm mutex poisoned").clone()
    }

    fn record(&self, call: CrmCall) {
        self.calls.lock().expect("crm mutex poisoned").push(call);
    }
}

#[async_trait]
impl CrmGateway for RecordingCrm {
    async fn create_contact(
        &self,
        properties: &ContactProperties,
    ) -> Result<CreateOutcome, CrmError> {
        self.record(CrmCall::Create(properties.clone()));
        if let Some((status, body)) = &self.rejection {
            return Err(CrmError::Rejected {
                status: *status,
                body: body.clone(),
            });
        }
        if self.conflicts {
            return Ok(CreateOutcome::Conflict);
        }
        Ok(CreateOutcome::Created)
    }

    async fn find_contact_id(&self, email: &str) -> Result<Option<ContactId>, CrmError> {
        self.record(CrmCall::Find(email.to_string()));
        if self.search_fails {
            return Err(CrmError::Transport("search offline".to_string()));
        }
        Ok(self.found_id.clone().map(ContactId))
    }

    async fn update_contact(
        &self,
        id: &ContactId,
        properties: &ContactProperties,
    ) -> Result<(), CrmError> {
        self.record(CrmCall::Update(id.clone(), properties.clone()));
        if self.update_fails {
            return Err(CrmError::Transport("update offline".to_string()));
        }
        Ok(())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
