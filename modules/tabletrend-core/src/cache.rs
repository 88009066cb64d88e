//! Time-windowed, capacity-bounded cache with full-flush eviction.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// A generic key/value cache cleared in its entirety on a fixed period —
/// a tumbling window, not per-entry expiry or LRU. Readers run
/// concurrently; `put` and the periodic flush take the write lock.
///
/// Must be created inside a tokio runtime; the flush task is owned by the
/// cache and aborted when it is dropped.
pub struct TumblingCache<K, V> {
    state: Arc<RwLock<HashMap<K, V>>>,
    capacity: usize,
    janitor: JoinHandle<()>,
}

impl<K, V> TumblingCache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(window: Duration, capacity: usize) -> Self {
        let state: Arc<RwLock<HashMap<K, V>>> = Arc::new(RwLock::new(HashMap::new()));
        let flush_state = Arc::clone(&state);
        let janitor = tokio::spawn(async move {
            let mut interval = tokio::time::interval(window);
            // The first tick of an interval fires immediately; skip it so
            // the first flush lands one full window from now.
            interval.tick().await;
            loop {
                interval.tick().await;
                let dropped = {
                    let mut map = flush_state.write().expect("cache lock poisoned");
                    let dropped = map.len();
                    map.clear();
                    dropped
                };
                debug!(dropped, "Tumbling window flushed");
            }
        });
        Self {
            state,
            capacity,
            janitor,
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.state
            .read()
            .expect("cache lock poisoned")
            .get(key)
            .cloned()
    }

    /// Insert only when the key is absent and there is remaining capacity;
    /// otherwise a silent no-op. The existence check and the insert happen
    /// under one write lock, so the capacity bound holds across concurrent
    /// writers and the flush. A key rejected at capacity stays uncached
    /// until the next flush — nothing but the flush frees space.
    pub fn put(&self, key: K, value: V) {
        let mut map = self.state.write().expect("cache lock poisoned");
        if !map.contains_key(&key) && map.len() < self.capacity {
            map.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.state.read().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Drop for TumblingCache<K, V> {
    fn drop(&mut self) {
        self.janitor.abort();
    }
}
