use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

/// A bounded key-value cache whose entries expire after a fixed lifetime.
///
/// The cache is owned by whoever needs it (a session, a request) and has no
/// timers of its own. Expired entries are dropped lazily whenever the cache
/// is read or written, using the timestamp supplied by the caller.
#[derive(Debug, Clone)]
pub struct ExpiringCache<K, V> {
    ttl: TimeDelta,
    capacity: usize,
    entries: HashMap<K, CacheEntry<V>>,
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create a cache holding at most `capacity` entries (minimum one), each
    /// living for `ttl`.
    pub fn new(ttl: TimeDelta, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            entries: HashMap::new(),
        }
    }

    /// Entry lifetime.
    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up a live entry as of `now`.
    pub fn get(&mut self, key: &K, now: DateTime<Utc>) -> Option<&V> {
        self.evict_expired(now);
        self.entries.get(key).map(|e| &e.value)
    }

    /// Store `value` under `key`, stamped with `timestamp`.
    ///
    /// Replacing an existing key refreshes its timestamp. When the cache is
    /// full, the entry with the oldest timestamp makes room.
    pub fn set(&mut self, key: K, value: V, timestamp: DateTime<Utc>) {
        self.evict_expired(timestamp);
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: timestamp,
            },
        );
    }

    /// Remove an entry, returning its value if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|e| e.value)
    }

    /// Number of stored entries, including ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn evict_expired(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, e| now.signed_duration_since(e.stored_at) <= ttl);
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.stored_at)
            .map(|(k, _)| k.clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}
