//! Cache invalidation.
//!
//! Downstream renderers may cache output keyed by cell position. A position
//! keeps its meaning only while the geometry and the ordered identity of the
//! items stay the same, so any change to either discards everything.

use super::geometry::ViewportGeometry;
use crate::model::ItemId;

/// Why the grid discarded its cached cell output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidationReason {
    /// The measured width changed.
    Width,
    /// Column or row geometry changed at the same width.
    Geometry,
    /// Item membership or order changed.
    Items,
}

/// True when two item sequences differ in length, membership or order.
///
/// Pairwise identity comparison, O(n). Cheap enough to run on every update.
pub fn must_invalidate(prev: &[ItemId], next: &[ItemId]) -> bool {
    prev.len() != next.len() || prev.iter().zip(next).any(|(a, b)| a != b)
}

/// First applicable reason, checked in order: width, geometry, items.
pub fn detect(
    prev: &ViewportGeometry,
    next: &ViewportGeometry,
    items_changed: bool,
) -> Option<InvalidationReason> {
    if prev.width != next.width {
        Some(InvalidationReason::Width)
    } else if prev != next {
        Some(InvalidationReason::Geometry)
    } else if items_changed {
        Some(InvalidationReason::Items)
    } else {
        None
    }
}

/// Owned copy of the identifiers of the last item sequence.
///
/// The item slice itself is only borrowed for one update; the snapshot is
/// what the next update compares against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemSnapshot {
    ids: Vec<ItemId>,
}

impl ItemSnapshot {
    /// Capture the identifiers of a sequence.
    pub fn capture(ids: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Identifiers in order.
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifier at a position.
    pub fn get(&self, index: usize) -> Option<ItemId> {
        self.ids.get(index).copied()
    }

    /// Whether replacing `self` with `next` must invalidate cached cells.
    pub fn must_invalidate(&self, next: &ItemSnapshot) -> bool {
        must_invalidate(&self.ids, &next.ids)
    }
}
