//! Best-effort property enrichment for the address-selection flow.
//!
//! Upstream sources disagree on field names and nesting; the mapper folds
//! the known spellings into one sparse record, and every failure mode
//! degrades to "no details" instead of an error.

pub mod domain;
pub mod provider;
pub mod router;
pub mod service;

pub(crate) mod mapping;

#[cfg(test)]
mod tests;

pub use domain::{PropertyDetails, PropertyLookup};
pub use provider::{ApiNinjasProperties, PropertyProvider, ProviderError};
pub use router::property_router;
pub use service::{PropertyEnrichmentService, PropertyError};
