use async_trait::async_trait;
use serde_json::{json, Value};

use super::domain::{ContactId, ContactProperties};
use crate::workflows::http_client;

const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

/// Result of a contact create attempt. A duplicate email is a branch of the
/// upsert conversation, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Conflict,
}

/// Outbound CRM operations the intake service depends on.
#[async_trait]
pub trait CrmGateway: Send + Sync {
    /// Create a contact from the given property map.
    async fn create_contact(
        &self,
        properties: &ContactProperties,
    ) -> Result<CreateOutcome, CrmError>;

    /// Resolve an existing contact's id by exact email match, taking the
    /// first search result.
    async fn find_contact_id(&self, email: &str) -> Result<Option<ContactId>, CrmError>;

    /// Overwrite properties on an existing contact.
    async fn update_contact(
        &self,
        id: &ContactId,
        properties: &ContactProperties,
    ) -> Result<(), CrmError>;
}

/// Error enumeration for CRM traffic.
#[derive(Debug, thiserror::Error)]
pub enum CrmError {
    #[error("contact service rejected the request: status {status}")]
    Rejected { status: u16, body: String },
    #[error("contact service unreachable: {0}")]
    Transport(String),
    #[error("contact service returned an unreadable payload: {0}")]
    Payload(String),
}

/// Client for the hosted CRM's contacts API.
pub struct HubSpotClient {
    token: String,
    base_url: String,
    client: reqwest::Client,
}

impl HubSpotClient {
    pub fn new(token: String) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: http_client(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CrmGateway for HubSpotClient {
    async fn create_contact(
        &self,
        properties: &ContactProperties,
    ) -> Result<CreateOutcome, CrmError> {
        let response = self
            .client
            .post(format!("{}/crm/v3/objects/contacts", self.base_url))
            .bearer_auth(&self.token)
            .json(&json!({ "properties": properties }))
            .send()
            .await
            .map_err(|err| CrmError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(CreateOutcome::Created);
        }
        if status == reqwest::StatusCode::CONFLICT {
            return Ok(CreateOutcome::Conflict);
        }

        let body = response.text().await.unwrap_or_default();
        Err(CrmError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    async fn find_contact_id(&self, email: &str) -> Result<Option<ContactId>, CrmError> {
        let filter = json!({
            "filterGroups": [{
                "filters": [{
                    "propertyName": "email",
                    "operator": "EQ",
                    "value": email,
                }],
            }],
        });

        let response = self
            .client
            .post(format!("{}/crm/v3/objects/contacts/search", self.base_url))
            .bearer_auth(&self.token)
            .json(&filter)
            .send()
            .await
            .map_err(|err| CrmError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CrmError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| CrmError::Payload(err.to_string()))?;

        Ok(payload
            .get("results")
            .and_then(Value::as_array)
            .and_then(|results| results.first())
            .and_then(|result| result.get("id"))
            .and_then(contact_id_value))
    }

    async fn update_contact(
        &self,
        id: &ContactId,
        properties: &ContactProperties,
    ) -> Result<(), CrmError> {
        let response = self
            .client
            .patch(format!(
                "{}/crm/v3/objects/contacts/{}",
                self.base_url, id.0
            ))
            .bearer_auth(&self.token)
            .json(&json!({ "properties": properties }))
            .send()
            .await
            .map_err(|err| CrmError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(CrmError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// The CRM serializes contact ids as strings, but tolerate bare numbers.
fn contact_id_value(value: &Value) -> Option<ContactId> {
    match value {
        Value::String(id) => Some(ContactId(id.clone())),
        Value::Number(id) => Some(ContactId(id.to_string())),
        _ => None,
    }
}
