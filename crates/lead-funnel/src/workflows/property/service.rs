use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{PropertyDetails, PropertyLookup};
use super::mapping;
use super::provider::PropertyProvider;

/// Best-effort property enrichment.
///
/// Enrichment decorates the seller form; a missing key, an upstream outage,
/// or an unrecognizable payload all degrade to "no details" so the lead
/// flow is never blocked.
pub struct PropertyEnrichmentService<P> {
    provider: Option<Arc<P>>,
}

impl<P> PropertyEnrichmentService<P>
where
    P: PropertyProvider + 'static,
{
    pub fn new(provider: Option<Arc<P>>) -> Self {
        Self { provider }
    }

    /// Look the address up and normalize whatever comes back. The only
    /// error is a missing address; every downstream failure is `Ok(None)`.
    pub async fn enrich(
        &self,
        lookup: PropertyLookup,
    ) -> Result<Option<PropertyDetails>, PropertyError> {
        let address = lookup
            .address
            .filter(|address| !address.is_empty())
            .ok_or(PropertyError::MissingAddress)?;

        let Some(provider) = &self.provider else {
            debug!("property service key not configured, skipping enrichment");
            return Ok(None);
        };

        let payload = match provider.lookup(&address).await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "property lookup failed, returning no details");
                return Ok(None);
            }
        };

        let details = mapping::details_from_payload(&payload);
        if details.is_empty() {
            debug!("property payload carried no recognizable fields");
            return Ok(None);
        }
        Ok(Some(details))
    }
}

/// Error raised by the enrichment service.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("Address is required")]
    MissingAddress,
}
