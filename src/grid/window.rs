//! Windowing engine.
//!
//! Maps the flat item sequence onto rows of `column_count` cells and decides
//! which rows to render for the current scroll offset.
//!
//! # Overscan
//! The overscan band is added symmetrically above and below the visible
//! rows regardless of scroll direction or velocity. Rendering a few extra
//! rows on both sides keeps fast or reversing scrolls from exposing blank
//! rows.

use super::geometry::ViewportGeometry;
use super::types::{BoundingBox, ColumnIndex, ItemIndex, RowIndex};
use std::ops::RangeInclusive;

/// Rows rendered beyond each edge of the viewport unless configured otherwise.
pub const DEFAULT_OVERSCAN_COUNT: usize = 2;

/// Rows to render for one scroll position.
///
/// All bounds are inclusive.
///
/// # Invariants
/// - `overscan_first_row <= first_row <= last_row <= overscan_last_row`
/// - `overscan_last_row < row_count` of the engine that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    /// First row intersecting the viewport.
    pub first_row: RowIndex,
    /// Last row intersecting the viewport.
    pub last_row: RowIndex,
    /// First row to render, overscan included.
    pub overscan_first_row: RowIndex,
    /// Last row to render, overscan included.
    pub overscan_last_row: RowIndex,
}

impl VisibleWindow {
    /// Rows intersecting the viewport.
    pub fn visible_rows(&self) -> impl Iterator<Item = RowIndex> {
        (self.first_row.get()..=self.last_row.get()).map(RowIndex::new)
    }

    /// Rows to render, overscan included.
    pub fn rendered_rows(&self) -> impl Iterator<Item = RowIndex> {
        self.rendered_range().map(RowIndex::new)
    }

    fn rendered_range(&self) -> RangeInclusive<usize> {
        self.overscan_first_row.get()..=self.overscan_last_row.get()
    }
}

/// One grid cell handed to the render callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row of the cell.
    pub row: RowIndex,
    /// Column of the cell.
    pub column: ColumnIndex,
    /// Item shown in the cell; `None` for the blank tail of the last row.
    pub item_index: Option<ItemIndex>,
    /// Pixel rectangle, relative to the top of the grid.
    pub bounds: BoundingBox,
}

/// Expand `[start, stop]` by `overscan` rows on both sides, clamped to
/// `[0, row_count - 1]`.
///
/// `row_count` must be at least 1.
pub fn overscan_rows(start: usize, stop: usize, row_count: usize, overscan: usize) -> (usize, usize) {
    debug_assert!(row_count > 0, "overscan_rows needs at least one row");
    let last = row_count.saturating_sub(1);
    (
        start.saturating_sub(overscan),
        stop.saturating_add(overscan).min(last),
    )
}

/// Computes the rendered window from geometry, item count and scroll state.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowingEngine {
    item_count: usize,
    geometry: ViewportGeometry,
    scroll_offset: u64,
    viewport_height: u32,
    overscan_count: usize,
}

impl WindowingEngine {
    /// Engine with no items, scrolled to the top, and no viewport height yet.
    pub fn new(geometry: ViewportGeometry, overscan_count: usize) -> Self {
        Self {
            item_count: 0,
            geometry,
            scroll_offset: 0,
            viewport_height: 0,
            overscan_count,
        }
    }

    /// Current geometry.
    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    /// Replace the geometry.
    pub fn set_geometry(&mut self, geometry: ViewportGeometry) {
        self.geometry = geometry;
    }

    /// Number of items in the sequence.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Replace the item count.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    /// Height of the viewport in pixels.
    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Replace the viewport height.
    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        self.viewport_height = viewport_height;
    }

    /// Rows rendered beyond each edge.
    pub fn overscan_count(&self) -> usize {
        self.overscan_count
    }

    /// Last applied scroll offset, as given (not clamped).
    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Replace the scroll offset.
    pub fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    /// `ceil(item_count / column_count)`.
    pub fn row_count(&self) -> usize {
        let columns = self.columns();
        self.item_count.div_ceil(columns)
    }

    /// Height of all rows.
    pub fn total_height(&self) -> u64 {
        self.row_count() as u64 * u64::from(self.geometry.row_height)
    }

    /// Largest offset that still fills the viewport.
    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height()
            .saturating_sub(u64::from(self.viewport_height))
    }

    /// Scroll offset clamped to `[0, max_scroll_offset]`.
    pub fn clamped_scroll_offset(&self) -> u64 {
        self.scroll_offset.min(self.max_scroll_offset())
    }

    /// Scroll offset that puts `row` at the top of the viewport.
    ///
    /// Rows past the end clamp to the last row; offsets past the end clamp to
    /// [`Self::max_scroll_offset`].
    pub fn offset_for_row(&self, row: RowIndex) -> u64 {
        let last_row = self.row_count().saturating_sub(1);
        let row = row.get().min(last_row) as u64;
        (row * u64::from(self.geometry.row_height)).min(self.max_scroll_offset())
    }

    /// Visible and overscanned rows, or `None` when there is nothing to render.
    ///
    /// Nothing renders when there are no items, the width has not been
    /// measured, or the viewport has no height yet.
    pub fn compute_visible_window(&self) -> Option<VisibleWindow> {
        let row_count = self.row_count();
        let row_height = u64::from(self.geometry.row_height);
        if row_count == 0
            || row_height == 0
            || self.viewport_height == 0
            || !self.geometry.is_laid_out()
        {
            return None;
        }

        let last_row = row_count - 1;
        let offset = self.clamped_scroll_offset();
        let bottom = offset + u64::from(self.viewport_height) - 1;
        let first = ((offset / row_height) as usize).min(last_row);
        let last = ((bottom / row_height) as usize).min(last_row);
        let (overscan_first, overscan_last) =
            overscan_rows(first, last, row_count, self.overscan_count);

        Some(VisibleWindow {
            first_row: RowIndex::new(first),
            last_row: RowIndex::new(last),
            overscan_first_row: RowIndex::new(overscan_first),
            overscan_last_row: RowIndex::new(overscan_last),
        })
    }

    /// `row * column_count + column`, or `None` when no item occupies the cell.
    pub fn item_index(&self, row: RowIndex, column: ColumnIndex) -> Option<ItemIndex> {
        let columns = self.columns();
        if column.get() >= columns {
            return None;
        }
        let index = row.get() * columns + column.get();
        (index < self.item_count).then(|| ItemIndex::new(index))
    }

    /// Pixel rectangle of a cell.
    pub fn cell_bounds(&self, row: RowIndex, column: ColumnIndex) -> BoundingBox {
        BoundingBox::new(
            column.get() as u64 * u64::from(self.geometry.column_width),
            row.get() as u64 * u64::from(self.geometry.row_height),
            self.geometry.column_width,
            self.geometry.row_height,
        )
    }

    /// Every cell of the rendered band, row-major.
    ///
    /// Trailing cells of the last row are included with `item_index: None`
    /// so they keep occupying grid space.
    pub fn cells(&self, window: &VisibleWindow) -> impl Iterator<Item = Cell> + '_ {
        let columns = self.columns();
        window.rendered_rows().flat_map(move |row| {
            (0..columns).map(move |col| {
                let column = ColumnIndex::new(col);
                Cell {
                    row,
                    column,
                    item_index: self.item_index(row, column),
                    bounds: self.cell_bounds(row, column),
                }
            })
        })
    }

    fn columns(&self) -> usize {
        self.geometry.column_count.max(1) as usize
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
