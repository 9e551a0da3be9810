//! Navigation controller.
//!
//! Turns "jump to character" and externally requested scroll positions into
//! one-shot [`ScrollTarget`]s. A target stays pending until the grid consumes
//! it at the end of an update, after the geometry for that update is in
//! effect. Issuing a new target replaces any pending one.

use super::types::ItemIndex;
use super::window::WindowingEngine;
use std::collections::HashMap;
use tracing::debug;

/// Jump character that stands for every label starting with a digit.
pub const NUMERIC_JUMP_CHARACTER: char = '#';

/// A one-shot scroll command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollTarget {
    /// Scroll so the row containing this item is at the top, column 0.
    Item(ItemIndex),
    /// Scroll to an absolute pixel offset.
    Offset(u64),
}

/// Normalized leading character of a label.
///
/// The first non-whitespace character, lowercased. Digits fold to
/// [`NUMERIC_JUMP_CHARACTER`].
pub fn leading_character(label: &str) -> Option<char> {
    label
        .chars()
        .find(|c| !c.is_whitespace())
        .map(normalize_character)
}

fn normalize_character(c: char) -> char {
    if c.is_ascii_digit() {
        NUMERIC_JUMP_CHARACTER
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// First item index for each leading character.
///
/// Built once per item-set change, so jumps do not need the item slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterIndex {
    first_index: HashMap<char, ItemIndex>,
    order: Vec<char>,
}

impl CharacterIndex {
    /// Index the labels of an ordered sequence.
    pub fn build<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut index = Self::default();
        for (position, label) in labels.into_iter().enumerate() {
            let Some(c) = leading_character(label) else {
                continue;
            };
            if let std::collections::hash_map::Entry::Vacant(slot) = index.first_index.entry(c) {
                slot.insert(ItemIndex::new(position));
                index.order.push(c);
            }
        }
        index
    }

    /// First item whose label starts with `character`, case-insensitively.
    pub fn index_of(&self, character: char) -> Option<ItemIndex> {
        self.first_index.get(&normalize_character(character)).copied()
    }

    /// Characters that have at least one item, in order of first appearance.
    pub fn characters(&self) -> &[char] {
        &self.order
    }

    /// Whether no label had a leading character.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Pending scroll target plus the bookkeeping needed to filter redundant ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationController {
    pending: Option<ScrollTarget>,
    last_applied: Option<u64>,
}

impl NavigationController {
    /// Controller with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently pending target.
    pub fn pending(&self) -> Option<ScrollTarget> {
        self.pending
    }

    /// Offset applied by the most recently consumed target.
    pub fn last_applied(&self) -> Option<u64> {
        self.last_applied
    }

    /// Queue a jump to the first item starting with `character`.
    ///
    /// Returns the matching item, or `None` (and leaves any pending target in
    /// place) when no label starts with that character.
    pub fn jump_to_character(
        &mut self,
        character: char,
        index: &CharacterIndex,
    ) -> Option<ItemIndex> {
        match index.index_of(character) {
            Some(item) => {
                debug!(%character, item = item.get(), "Jump to character resolved");
                self.pending = Some(ScrollTarget::Item(item));
                Some(item)
            }
            None => {
                debug!(%character, "Jump to character has no matching item");
                None
            }
        }
    }

    /// Queue a scroll to an item.
    pub fn scroll_to_item(&mut self, item: ItemIndex) {
        self.pending = Some(ScrollTarget::Item(item));
    }

    /// Queue an externally supplied absolute offset.
    ///
    /// Zero means "no request" and an offset equal to `current_offset` is
    /// already in effect; neither is queued. Returns whether it was queued.
    pub fn scroll_to_position(&mut self, offset: u64, current_offset: u64) -> bool {
        if offset == 0 || offset == current_offset {
            return false;
        }
        self.pending = Some(ScrollTarget::Offset(offset));
        true
    }

    /// Take the pending target, leaving nothing pending.
    pub fn take_target(&mut self) -> Option<ScrollTarget> {
        self.pending.take()
    }

    /// Consume the pending target against the engine's current geometry.
    ///
    /// Item targets resolve to the start of their row (clamped to the last
    /// row). Offsets are forwarded verbatim. Returns the applied offset.
    pub fn apply_pending(&mut self, engine: &mut WindowingEngine) -> Option<u64> {
        let target = self.take_target()?;
        let offset = resolve(target, engine);
        engine.set_scroll_offset(offset);
        self.last_applied = Some(offset);
        debug!(?target, offset, "Scroll target applied");
        Some(offset)
    }
}

/// Pixel offset for a target under the engine's current geometry.
pub fn resolve(target: ScrollTarget, engine: &WindowingEngine) -> u64 {
    match target {
        ScrollTarget::Item(item) => {
            let row = item.row(engine.geometry().column_count);
            engine.offset_for_row(row)
        }
        ScrollTarget::Offset(offset) => offset,
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
