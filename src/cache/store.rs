//! In-memory store for raw API responses keyed by request URL
//!
//! Provides a `Cache` that memoizes opaque response bodies so repeated
//! requests for the same URL (e.g. revisiting a pagination page) can be
//! served without touching the network. Expiry is handled separately by the
//! [`Reaper`](super::Reaper), which sweeps stale entries in the background.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// A single cached response: the raw body bytes and when they were stored.
///
/// Entries are immutable once created; overwriting a key inserts a new entry
/// with a fresh timestamp rather than mutating the old one.
#[derive(Debug, Clone)]
struct Entry {
    /// When the entry was inserted
    created_at: DateTime<Utc>,
    /// The raw response body for this URL
    payload: Vec<u8>,
}

impl Entry {
    fn new(payload: Vec<u8>) -> Self {
        Self {
            created_at: Utc::now(),
            payload,
        }
    }

    /// Returns how long ago this entry was inserted.
    fn age(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.created_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

/// Thread-safe keyed store of cached responses.
///
/// Keys are request URLs, matched exactly (case-sensitive, query string
/// included). The store owns all entries; `get` hands out copies of payloads,
/// so callers never alias the stored bytes. Cloning a `Cache` clones the
/// handle, not the contents — all clones share one map.
///
/// The internal lock is held only for the duration of a map operation, never
/// across network or decoding work, so every operation completes in bounded
/// time.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl Cache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the cached payload for `key`, if present.
    ///
    /// Does not check staleness: an entry stays retrievable until the reaper
    /// removes it or it is overwritten.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let entries = self.entries.lock().unwrap();
        entries.get(key).map(|entry| entry.payload.clone())
    }

    /// Inserts or replaces the entry for `key` with a fresh timestamp.
    ///
    /// Overwriting an existing key is expected (e.g. a re-fetch after the
    /// old entry expired).
    pub fn set(&self, key: impl Into<String>, payload: Vec<u8>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.into(), Entry::new(payload));
    }

    /// Removes the entry for `key`; a no-op if the key is absent.
    pub fn delete(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
    }

    /// Removes every entry older than `max_age` and returns how many were
    /// removed.
    ///
    /// Ages are evaluated against each entry's current timestamp while the
    /// lock is held, so a `set` that refreshed a key just before the sweep
    /// reached it leaves the refreshed entry untouched.
    pub fn reap(&self, max_age: Duration) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|_, entry| entry.age() <= max_age);
        before - entries.len()
    }

    /// Returns the current number of entries.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap();
        entries.len()
    }

    /// Returns true if the cache holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_get_missing_key_returns_none() {
        let cache = Cache::new();
        assert!(cache.get("https://example.com/never-set").is_none());
    }

    #[test]
    fn test_set_then_get_returns_exact_bytes() {
        let cache = Cache::new();
        let payload = b"{\"count\": 1281}".to_vec();

        cache.set("https://example.com/a", payload.clone());

        assert_eq!(cache.get("https://example.com/a"), Some(payload));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_case_sensitive_and_include_query() {
        let cache = Cache::new();
        cache.set("https://example.com/a?offset=0", b"page0".to_vec());

        assert!(cache.get("https://example.com/A?offset=0").is_none());
        assert!(cache.get("https://example.com/a?offset=20").is_none());
        assert!(cache.get("https://example.com/a?offset=0").is_some());
    }

    #[test]
    fn test_overwrite_replaces_payload() {
        let cache = Cache::new();
        cache.set("k", b"first".to_vec());
        cache.set("k", b"second".to_vec());

        assert_eq!(cache.get("k"), Some(b"second".to_vec()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let cache = Cache::new();
        cache.set("k", b"v".to_vec());

        cache.delete("k");
        assert!(cache.get("k").is_none());

        // Deleting an absent key leaves the store unchanged
        cache.delete("k");
        cache.delete("never-existed");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_returned_payload_is_a_copy() {
        let cache = Cache::new();
        cache.set("k", b"original".to_vec());

        let mut copy = cache.get("k").unwrap();
        copy[0] = b'X';

        assert_eq!(cache.get("k"), Some(b"original".to_vec()));
    }

    #[test]
    fn test_reap_removes_only_stale_entries() {
        let cache = Cache::new();
        cache.set("old", b"stale".to_vec());
        thread::sleep(Duration::from_millis(30));
        cache.set("new", b"fresh".to_vec());

        let removed = cache.reap(Duration::from_millis(15));

        assert_eq!(removed, 1);
        assert!(cache.get("old").is_none());
        assert_eq!(cache.get("new"), Some(b"fresh".to_vec()));
    }

    #[test]
    fn test_reap_keeps_refreshed_entry() {
        let cache = Cache::new();
        cache.set("k", b"v1".to_vec());
        thread::sleep(Duration::from_millis(30));
        // Refreshing resets the timestamp, so the sweep must keep it
        cache.set("k", b"v2".to_vec());

        let removed = cache.reap(Duration::from_millis(15));

        assert_eq!(removed, 0);
        assert_eq!(cache.get("k"), Some(b"v2".to_vec()));
    }

    #[test]
    fn test_concurrent_set_get_delete() {
        let cache = Cache::new();
        let mut handles = Vec::new();

        for worker in 0..8 {
            let cache = cache.clone();
            handles.push(thread::spawn(move || {
                for i in 0..100 {
                    let key = format!("worker-{}-item-{}", worker, i);
                    let value = format!("value-{}-{}", worker, i).into_bytes();
                    cache.set(key.clone(), value.clone());
                    // Read-after-write per key must hold
                    assert_eq!(cache.get(&key), Some(value));
                    if i % 3 == 0 {
                        cache.delete(&key);
                        assert!(cache.get(&key).is_none());
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker thread panicked");
        }
    }
}
