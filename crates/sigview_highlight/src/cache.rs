//! Memoization caches for rendered markup.
//!
//! Two maps: canonical type key → rendered type, and canonical signature
//! key → rendered method or constructor. Entries are never evicted; a cache
//! is bounded by the number of distinct descriptors ever rendered through it.
//!
//! # Thread Safety
//!
//! Each map is split into shards guarded by a `parking_lot::RwLock`. A
//! lookup takes a shard read lock; an insert takes the shard write lock and
//! re-checks, so racing callers may both render a key but every caller ends
//! up holding the same stored value.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use crate::config::HighlightConfig;

/// Number of shards per map.
const NUM_SHARDS: usize = 16;

/// Immutable rendered markup.
///
/// Cloning shares the allocation; [`ptr_eq`](Self::ptr_eq) tells whether two
/// values came from the same cache entry.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RenderedSignature(Arc<str>);

impl RenderedSignature {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether both values share one allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl From<String> for RenderedSignature {
    fn from(markup: String) -> Self {
        Self(Arc::from(markup))
    }
}

impl Deref for RenderedSignature {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RenderedSignature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RenderedSignature {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for RenderedSignature {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Sharded string-keyed map.
struct ShardedMap {
    shards: [RwLock<FxHashMap<Box<str>, RenderedSignature>>; NUM_SHARDS],
}

impl ShardedMap {
    fn new() -> Self {
        Self {
            shards: std::array::from_fn(|_| RwLock::new(FxHashMap::default())),
        }
    }

    #[inline]
    fn shard_for(key: &str) -> usize {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation is fine for hash-based shard selection"
        )]
        let hash = hasher.finish() as usize;
        hash % NUM_SHARDS
    }

    fn get(&self, key: &str) -> Option<RenderedSignature> {
        self.shards[Self::shard_for(key)].read().get(key).cloned()
    }

    /// Insert unless present; returns whichever value ends up stored.
    fn insert(&self, key: &str, markup: String) -> RenderedSignature {
        let mut guard = self.shards[Self::shard_for(key)].write();

        // Double-check after acquiring write lock
        if let Some(existing) = guard.get(key) {
            return existing.clone();
        }

        let rendered = RenderedSignature::from(markup);
        guard.insert(Box::from(key), rendered.clone());
        rendered
    }

    fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    fn clear(&self) {
        for shard in &self.shards {
            shard.write().clear();
        }
    }
}

#[derive(Default)]
struct Counters {
    type_hits: AtomicU64,
    type_misses: AtomicU64,
    method_hits: AtomicU64,
    method_misses: AtomicU64,
}

impl Counters {
    fn reset(&self) {
        for counter in [
            &self.type_hits,
            &self.type_misses,
            &self.method_hits,
            &self.method_misses,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Snapshot of cache activity.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct CacheStats {
    pub type_hits: u64,
    pub type_misses: u64,
    pub method_hits: u64,
    pub method_misses: u64,
    pub type_entries: usize,
    pub method_entries: usize,
}

/// Rendered-markup caches plus the configuration they were rendered with.
///
/// Construct once and hand out by reference to
/// [`Highlighter`](crate::Highlighter)s. `SignatureCache` is `Send + Sync`.
pub struct SignatureCache {
    config: HighlightConfig,
    types: ShardedMap,
    methods: ShardedMap,
    counters: Counters,
}

impl SignatureCache {
    /// Empty cache with the default configuration.
    pub fn new() -> Self {
        Self::with_config(HighlightConfig::default())
    }

    pub fn with_config(config: HighlightConfig) -> Self {
        Self {
            config,
            types: ShardedMap::new(),
            methods: ShardedMap::new(),
            counters: Counters::default(),
        }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            type_hits: self.counters.type_hits.load(Ordering::Relaxed),
            type_misses: self.counters.type_misses.load(Ordering::Relaxed),
            method_hits: self.counters.method_hits.load(Ordering::Relaxed),
            method_misses: self.counters.method_misses.load(Ordering::Relaxed),
            type_entries: self.types.len(),
            method_entries: self.methods.len(),
        }
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&self) {
        self.types.clear();
        self.methods.clear();
        self.counters.reset();
    }

    pub(crate) fn lookup_type(&self, key: &str) -> Option<RenderedSignature> {
        let hit = self.types.get(key);
        Self::count(
            hit.is_some(),
            &self.counters.type_hits,
            &self.counters.type_misses,
        );
        if hit.is_some() {
            tracing::trace!(key, "type cache hit");
        }
        hit
    }

    pub(crate) fn store_type(&self, key: &str, markup: String) -> RenderedSignature {
        tracing::trace!(key, "type cache insert");
        self.types.insert(key, markup)
    }

    pub(crate) fn lookup_method(&self, key: &str) -> Option<RenderedSignature> {
        let hit = self.methods.get(key);
        Self::count(
            hit.is_some(),
            &self.counters.method_hits,
            &self.counters.method_misses,
        );
        if hit.is_some() {
            tracing::trace!(key, "signature cache hit");
        }
        hit
    }

    pub(crate) fn store_method(&self, key: &str, markup: String) -> RenderedSignature {
        tracing::trace!(key, "signature cache insert");
        self.methods.insert(key, markup)
    }

    #[inline]
    fn count(hit: bool, hits: &AtomicU64, misses: &AtomicU64) {
        let counter = if hit { hits } else { misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for SignatureCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SignatureCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureCache")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
