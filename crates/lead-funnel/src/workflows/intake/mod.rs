//! Seller-lead and contact-form intake.
//!
//! Submissions pass through a honeypot screen, required-field validation,
//! and code-to-label normalization before the upsert conversation with the
//! external CRM: one create attempt, and on an email conflict an explicit
//! search-by-email followed by an update that never touches the email field.

pub mod crm;
pub mod domain;
pub mod router;
pub mod service;
pub(crate) mod labels;
pub(crate) mod validate;

#[cfg(test)]
mod tests;

pub use crm::{CreateOutcome, CrmError, CrmGateway, HubSpotClient};
pub use domain::{
    ContactId, ContactMessage, ContactProperties, ContactSubmission, Coordinates, IntakeOutcome,
    Lead, LeadSubmission, VisitorGeo,
};
pub use router::intake_router;
pub use service::{IntakeError, LeadIntakeService};
pub use validate::ValidationError;
