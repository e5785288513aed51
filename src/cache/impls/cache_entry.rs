use chrono::{DateTime, TimeDelta, Utc};
use crate::cache::structs::cache_entry::CacheEntry;

impl CacheEntry {
    pub fn new(payload: Vec<u8>, ttl: Option<u64>, now: DateTime<Utc>) -> CacheEntry {
        CacheEntry {
            expires_at: Self::expiry(ttl, now),
            payload,
        }
    }

    /// Expiry instant for a `ttl` in seconds counted from `now`. No ttl, a
    /// zero ttl and a ttl beyond the representable date range all mean the
    /// entry never expires.
    pub fn expiry(ttl: Option<u64>, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        ttl.filter(|seconds| *seconds > 0)
            .and_then(|seconds| i64::try_from(seconds).ok())
            .and_then(TimeDelta::try_seconds)
            .and_then(|delta| now.checked_add_signed(delta))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn decode(data: &[u8]) -> Result<CacheEntry, serde_json::Error> {
        serde_json::from_slice(data)
    }
}
