use std::time::Duration;

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, warn};

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
pub const SLIDING_WINDOW: Duration = Duration::from_secs(2 * 60);

struct CacheEntry {
    value: Value,
    expires_at: Instant,
    last_access: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant, sliding_window: Duration) -> bool {
        now >= self.expires_at.min(self.last_access + sliding_window)
    }
}

/// Keyed JSON store with an absolute TTL per entry and a shared sliding window.
///
/// An entry is live while `now < min(expires_at, last_access + sliding_window)`;
/// every successful read refreshes `last_access`. Values are kept as
/// `serde_json::Value`, so one cache can hold every resource type.
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
    default_ttl: Duration,
    sliding_window: Duration,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_windows(DEFAULT_TTL, SLIDING_WINDOW)
    }

    pub fn with_windows(default_ttl: Duration, sliding_window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
            sliding_window,
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let now = Instant::now();
        let decoded = {
            let mut entry = self.entries.get_mut(key)?;
            if entry.is_expired(now, self.sliding_window) {
                drop(entry);
                self.entries
                    .remove_if(key, |_, entry| entry.is_expired(now, self.sliding_window));
                debug!("cache entry {} expired", key);
                return None;
            }
            entry.last_access = now;
            T::deserialize(&entry.value)
        };
        match decoded {
            Ok(value) => {
                debug!("cache hit for {}", key);
                Some(value)
            }
            Err(err) => {
                debug!("cache entry {} could not be decoded: {}", key, err);
                None
            }
        }
    }

    /// `ttl` defaults to five minutes.
    pub fn set<T: Serialize>(&self, key: impl Into<String>, value: &T, ttl: Option<Duration>) {
        let key = key.into();
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(err) => {
                warn!("cache entry {} could not be encoded: {}", key, err);
                return;
            }
        };
        let now = Instant::now();
        let entry = CacheEntry {
            value,
            expires_at: now + ttl.unwrap_or(self.default_ttl),
            last_access: now,
        };
        self.entries.insert(key, entry);
    }

    pub fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_expired(now, self.sliding_window));
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
