//! Time-bounded memoization of evaluated grids
//!
//! A bounded-lifetime memo, not an LRU store: entries are keyed by the full
//! request tuple and expire a fixed duration after creation. Expiry is
//! checked on lookup; there is no background sweeping. Racing writers for
//! one key are tolerated, last write wins.

pub mod config;

pub use config::CacheConfig;

use crate::diagnostics::Diagnostic;
use crate::model::Grid;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Cache key: the expression text plus the domain parameters
///
/// Extents are keyed by their bit patterns so the key can derive `Eq` and
/// `Hash`; two extents compare equal exactly when the request values do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    expression: String,
    x_extent_bits: u64,
    y_extent_bits: u64,
    resolution: usize,
}

impl CacheKey {
    /// Build a key from request parameters
    pub fn new(expression: &str, x_extent: f64, y_extent: f64, resolution: usize) -> Self {
        Self {
            expression: expression.to_string(),
            x_extent_bits: x_extent.to_bits(),
            y_extent_bits: y_extent.to_bits(),
            resolution,
        }
    }

    /// The expression text this key was built from
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// A cached evaluation outcome
///
/// Fallback outcomes are cached too: a failing expression's entry carries
/// the fallback grid together with its diagnostic, which is replayed on
/// every hit within the window.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The memoized grid
    pub grid: Arc<Grid>,
    /// Diagnostic stored alongside fallback grids
    pub diagnostic: Option<Diagnostic>,
    created: Instant,
}

/// Process-wide memo of evaluated grids with wall-clock expiry
pub struct SurfaceCache {
    entries: RwLock<FxHashMap<CacheKey, CacheEntry>>,
    config: CacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SurfaceCache {
    /// Create a cache with the given configuration
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The configuration this cache runs with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Look up a fresh entry; expired entries are dropped on the way
    pub fn lookup(&self, key: &CacheKey) -> Option<CacheEntry> {
        if !self.config.enable_result_caching {
            return None;
        }

        let expired = {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if self.is_fresh(entry) => {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    return Some(entry.clone());
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            self.entries.write().remove(key);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        match self.config.cache_ttl {
            None => true,
            Some(ttl) => entry.created.elapsed() < ttl,
        }
    }

    /// Store an outcome under its key; an existing entry is superseded
    pub fn insert(&self, key: CacheKey, grid: Arc<Grid>, diagnostic: Option<Diagnostic>) {
        if !self.config.enable_result_caching {
            return;
        }
        let entry = CacheEntry {
            grid,
            diagnostic,
            created: Instant::now(),
        };
        self.entries.write().insert(key, entry);
    }

    /// Number of stored entries, expired or not
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop all entries; counters keep their values
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Current hit/miss counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

/// Cache hit/miss counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that required computation
    pub misses: u64,
    /// Entries currently stored
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits: {}, misses: {}, entries: {}, hit rate: {:.1}%",
            self.hits,
            self.misses,
            self.entries,
            self.hit_rate() * 100.0
        )
    }
}
