use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::crm::{CreateOutcome, CrmError, CrmGateway};
use super::domain::{ContactProperties, ContactSubmission, IntakeOutcome, LeadSubmission};
use super::validate;
use super::validate::ValidationError;

/// Coordinates honeypot screening, validation, and the CRM upsert
/// conversation for both intake forms.
///
/// The gateway is optional: when the CRM token is not configured the service
/// reports a configuration error at request time instead of failing startup.
pub struct LeadIntakeService<C> {
    crm: Option<Arc<C>>,
}

impl<C> LeadIntakeService<C>
where
    C: CrmGateway + 'static,
{
    pub fn new(crm: Option<Arc<C>>) -> Self {
        Self { crm }
    }

    /// Run a seller-lead submission through the full intake pipeline.
    pub async fn submit_lead(
        &self,
        submission: LeadSubmission,
    ) -> Result<IntakeOutcome, IntakeError> {
        if submission.honeypot_tripped() {
            debug!("honeypot field set on lead form, discarding submission");
            return Ok(IntakeOutcome::Discarded);
        }

        let lead = validate::lead_from_submission(submission)?;
        let crm = self.gateway()?;

        let outcome = self.upsert(crm, &lead.email, lead.contact_properties()).await?;
        info!(outcome = outcome.label(), "lead forwarded to contact service");
        Ok(outcome)
    }

    /// Run a contact-form submission through the same pipeline, minus the
    /// lead-only validation rules and label mapping.
    pub async fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<IntakeOutcome, IntakeError> {
        if submission.honeypot_tripped() {
            debug!("honeypot field set on contact form, discarding submission");
            return Ok(IntakeOutcome::Discarded);
        }

        let contact = validate::contact_from_submission(submission)?;
        let crm = self.gateway()?;

        let outcome = self
            .upsert(crm, &contact.email, contact.contact_properties())
            .await?;
        info!(
            outcome = outcome.label(),
            "contact message forwarded to contact service"
        );
        Ok(outcome)
    }

    fn gateway(&self) -> Result<&Arc<C>, IntakeError> {
        self.crm.as_ref().ok_or(IntakeError::Unconfigured)
    }

    /// One create attempt; a conflict switches to the resolve-and-update
    /// branch, any other rejection is a hard failure.
    async fn upsert(
        &self,
        crm: &Arc<C>,
        email: &str,
        properties: ContactProperties,
    ) -> Result<IntakeOutcome, IntakeError> {
        let created = match crm.create_contact(&properties).await {
            Ok(outcome) => outcome,
            Err(err) => {
                match &err {
                    CrmError::Rejected { status, body } => {
                        error!(status, body = body.as_str(), "contact create rejected");
                    }
                    other => error!(error = %other, "contact create failed"),
                }
                return Err(err.into());
            }
        };

        match created {
            CreateOutcome::Created => Ok(IntakeOutcome::Created),
            CreateOutcome::Conflict => Ok(self.refresh_existing(crm, email, properties).await),
        }
    }

    /// The conflict itself proves the contact exists, so every failure on
    /// this branch still resolves to a caller-visible success.
    async fn refresh_existing(
        &self,
        crm: &Arc<C>,
        email: &str,
        properties: ContactProperties,
    ) -> IntakeOutcome {
        let existing = match crm.find_contact_id(email).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                warn!(email, "conflicted contact missing from search results, keeping existing record");
                return IntakeOutcome::DuplicateKept;
            }
            Err(err) => {
                warn!(error = %err, "contact search failed after conflict, keeping existing record");
                return IntakeOutcome::DuplicateKept;
            }
        };

        match crm.update_contact(&existing, &properties.without_email()).await {
            Ok(()) => IntakeOutcome::Updated,
            Err(err) => {
                warn!(error = %err, "contact update failed after conflict, keeping existing record");
                IntakeOutcome::DuplicateKept
            }
        }
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("contact service token not configured")]
    Unconfigured,
    #[error(transparent)]
    Upstream(#[from] CrmError),
}
