//! Cost-accounted LRU cache for decoded images.

mod cost;

pub use cost::{CostFn, RasterCost, RetainedCost};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::image::Image;
use crate::request::RequestKey;

/// Which image kinds the cache agrees to store.
#[derive(Debug, Clone, Copy)]
pub struct StoragePolicy {
    /// Whether animated images may be stored at all. When disabled, storing
    /// an animated image is a silent no-op.
    pub allow_animated: bool,
}

impl Default for StoragePolicy {
    fn default() -> Self {
        Self {
            allow_animated: true,
        }
    }
}

impl StoragePolicy {
    fn admits(self, image: &Image) -> bool {
        self.allow_animated || !image.is_animated()
    }
}

/// Cache entry with its cost and recency bookkeeping.
struct Entry {
    image: Image,
    cost: u64,
    /// Tick of the last insert or lookup. Evicted lowest-first.
    last_access: u64,
    /// Tick of insertion, breaking last-access ties oldest-first.
    inserted: u64,
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<RequestKey, Entry>,
    total_cost: u64,
    /// Monotonic recency clock, bumped on every insert and lookup.
    clock: u64,
}

impl CacheInner {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn remove(&mut self, key: &RequestKey) -> Option<Entry> {
        let entry = self.entries.remove(key)?;
        self.total_cost -= entry.cost;
        Some(entry)
    }

    /// Evict least-recently-used entries until the budget holds or nothing
    /// is left. A single oversized entry may evict itself here.
    fn evict_to(&mut self, capacity: u64) {
        while self.total_cost > capacity && !self.entries.is_empty() {
            let victim = self
                .entries
                .iter()
                .min_by_key(|(_, e)| (e.last_access, e.inserted))
                .map(|(k, _)| k.clone());
            if let Some(key) = victim {
                if let Some(entry) = self.remove(&key) {
                    tracing::debug!(cost = entry.cost, "evicted cache entry");
                }
            }
        }
    }
}

/// Thread-safe, byte-budgeted image cache.
///
/// One lock guards the entry map, the cost counter, and the recency order
/// together; every operation is short and O(1) amortized. The handle is
/// cheap to clone and meant to be passed explicitly to whoever needs it.
#[derive(Clone)]
pub struct ImageCache {
    inner: Arc<Mutex<CacheInner>>,
    cost_fn: Arc<dyn CostFn>,
    policy: StoragePolicy,
    capacity: u64,
}

impl ImageCache {
    /// Create a cache with the given byte capacity, [`RetainedCost`]
    /// accounting, and the default storage policy.
    #[must_use]
    pub fn new(capacity: u64) -> Self {
        Self::with(capacity, Arc::new(RetainedCost), StoragePolicy::default())
    }

    /// Create a cache with explicit cost accounting and storage policy.
    #[must_use]
    pub fn with(capacity: u64, cost_fn: Arc<dyn CostFn>, policy: StoragePolicy) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheInner::default())),
            cost_fn,
            policy,
            capacity,
        }
    }

    /// Store an image under a request fingerprint.
    ///
    /// Replaces any existing entry for the key (cost recomputed, recency
    /// bumped). A no-op if the storage policy refuses the image's kind.
    /// Evicts until the budget holds before returning.
    pub fn set(&self, key: &RequestKey, image: Image) {
        if !self.policy.admits(&image) {
            tracing::debug!("animated storage disabled, not caching");
            return;
        }

        let cost = self.cost_fn.cost(&image);
        let mut inner = self.inner.lock().unwrap();

        inner.remove(key);
        let now = inner.tick();
        inner.entries.insert(
            key.clone(),
            Entry {
                image,
                cost,
                last_access: now,
                inserted: now,
            },
        );
        inner.total_cost += cost;

        inner.evict_to(self.capacity);
    }

    /// Fetch a cached image, bumping its recency. `None` on miss.
    ///
    /// Lookups never block on decoding; only materialized entries live here.
    #[must_use]
    pub fn get(&self, key: &RequestKey) -> Option<Image> {
        let mut inner = self.inner.lock().unwrap();
        let now = inner.tick();
        let entry = inner.entries.get_mut(key)?;
        entry.last_access = now;
        Some(entry.image.clone())
    }

    /// Whether an entry exists for the key. Does not bump recency.
    #[must_use]
    pub fn contains(&self, key: &RequestKey) -> bool {
        self.inner.lock().unwrap().entries.contains_key(key)
    }

    /// Remove an entry if present.
    pub fn remove(&self, key: &RequestKey) {
        self.inner.lock().unwrap().remove(key);
    }

    /// Drop all entries and reset the cost counter.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.entries.clear();
        inner.total_cost = 0;
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().entries.is_empty()
    }

    /// Sum of all entry costs.
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        self.inner.lock().unwrap().total_cost
    }

    /// The configured byte budget.
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }
}
