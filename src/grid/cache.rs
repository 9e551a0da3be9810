//! LRU cache for rendered cell output.

use super::types::{ColumnIndex, RowIndex};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Capacity used when none (or zero) is configured.
pub const DEFAULT_CACHE_CAPACITY: usize = 512;

/// Cache key: a cell position.
///
/// Positions are only meaningful for one layout generation; the cache drops
/// everything when it sees a newer generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey {
    /// Row of the cell.
    pub row: RowIndex,
    /// Column of the cell.
    pub column: ColumnIndex,
}

impl CellKey {
    /// Create a key.
    pub fn new(row: RowIndex, column: ColumnIndex) -> Self {
        Self { row, column }
    }
}

/// Position-keyed LRU cache of render output.
///
/// Bounded capacity with LRU eviction. Empty renders (`None`) are cached too,
/// so blank trailing cells are not re-rendered either.
pub struct RenderCache<R> {
    cache: LruCache<CellKey, Option<R>>,
    generation: u64,
}

impl<R> RenderCache<R> {
    /// Create a cache with the given capacity.
    ///
    /// A capacity of 0 falls back to [`DEFAULT_CACHE_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            generation: 0,
        }
    }

    /// Generation the cached entries belong to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop every entry if `generation` differs from the cached one.
    ///
    /// Returns `true` when entries were discarded.
    pub fn sync(&mut self, generation: u64) -> bool {
        if generation == self.generation {
            return false;
        }
        self.generation = generation;
        let had_entries = !self.cache.is_empty();
        self.cache.clear();
        had_entries
    }

    /// Cached output for a cell, rendering and storing it on a miss.
    pub fn get_or_render<F>(&mut self, key: CellKey, render: F) -> Option<&R>
    where
        F: FnOnce() -> Option<R>,
    {
        self.cache.get_or_insert(key, render).as_ref()
    }

    /// Cached output without rendering. Updates LRU order.
    pub fn get(&mut self, key: &CellKey) -> Option<&Option<R>> {
        self.cache.get(key)
    }

    /// Clear the cache without changing the generation.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cached cells.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Maximum number of cached cells.
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

impl<R> Default for RenderCache<R> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl<R> std::fmt::Debug for RenderCache<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("generation", &self.generation)
            .finish()
    }
}
