use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use super::domain::RateQuote;

/// The weekly survey only changes once a week; an hour keeps the widget
/// fresh without burning the upstream quota.
const CACHE_TTL_HOURS: i64 = 1;

/// Single-slot cache for the weekly rate quote.
///
/// Only successful fetches are stored; failures fall through to the next
/// request so a transient upstream outage never pins an error for an hour.
pub struct RateCache {
    slot: RwLock<Option<CachedQuote>>,
    ttl: Duration,
}

#[derive(Debug, Clone)]
struct CachedQuote {
    quote: RateQuote,
    expires_at: DateTime<Utc>,
}

impl CachedQuote {
    fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

impl RateCache {
    pub fn new() -> Self {
        Self::with_ttl(Duration::hours(CACHE_TTL_HOURS))
    }

    pub(crate) fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    /// Cached quote, if one is stored and still fresh.
    pub async fn get(&self) -> Option<RateQuote> {
        let guard = self.slot.read().await;
        guard
            .as_ref()
            .filter(|cached| cached.is_valid())
            .map(|cached| cached.quote.clone())
    }

    /// Replace the slot with a fresh quote and restart the clock.
    pub async fn store(&self, quote: RateQuote) {
        let mut guard = self.slot.write().await;
        *guard = Some(CachedQuote {
            quote,
            expires_at: Utc::now() + self.ttl,
        });
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}
