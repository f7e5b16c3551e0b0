//! Lead intake and enrichment for a real-estate agent's marketing site.
//!
//! Visitor submissions from the seller-lead and contact forms are screened,
//! validated, and upserted into the external CRM; separate workflows proxy
//! mortgage amortization estimates and best-effort property lookups through
//! third-party data services. The CRM stays the system of record; nothing
//! is persisted locally beyond a short-lived rate cache.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
