//! In-memory TTL cache backed by `DashMap` for concurrent access.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Source of the current instant. Swapped for [`ManualClock`] in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Moves the clock forward. Clones share the same time.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A single cached value with its expiration time.
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Thread-safe in-memory cache with per-entry time-to-live.
///
/// Expired entries are lazily evicted on the next lookup for that key; there
/// is no background sweep and no capacity bound. Concurrent misses on the same
/// key each run their computation and the last write wins.
pub struct TtlCache<V, C = SystemClock> {
    store: DashMap<String, CacheEntry<V>>,
    clock: C,
}

impl<V: Clone> Default for TtlCache<V, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> TtlCache<V, SystemClock> {
    /// Creates an empty cache driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<V: Clone, C: Clock> TtlCache<V, C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: DashMap::new(),
            clock,
        }
    }

    /// Returns the cached value for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.store.get(key)?;
        if self.clock.now() > entry.expires_at {
            drop(entry);
            self.store.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Inserts or overwrites a cache entry expiring `ttl` from now.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.store.insert(
            key.into(),
            CacheEntry {
                value,
                expires_at: self.clock.now() + ttl,
            },
        );
    }

    /// Returns the live value for `key`, or runs `compute`, stores its result
    /// for `ttl` and returns it.
    pub async fn get_or_compute<F, Fut>(&self, key: &str, ttl: Duration, compute: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        if let Some(hit) = self.get(key) {
            tracing::debug!("cache hit for {}", key);
            return hit;
        }
        tracing::debug!("cache miss for {}", key);
        let value = compute().await;
        self.set(key, value.clone(), ttl);
        value
    }

    /// Number of stored entries, expired ones included until they are looked up.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Removes all entries from the cache.
    pub fn clear(&self) {
        self.store.clear();
    }
}
