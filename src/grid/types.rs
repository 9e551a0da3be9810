//! Core grid newtypes

/// Row index within the grid. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RowIndex(usize);

impl RowIndex {
    /// Create a new RowIndex from a raw value.
    pub fn new(row: usize) -> Self {
        Self(row)
    }

    /// Get the raw usize value.
    pub fn get(&self) -> usize {
        self.0
    }
}

/// Column index within a grid row. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ColumnIndex(usize);

impl ColumnIndex {
    /// Create a new ColumnIndex from a raw value.
    pub fn new(column: usize) -> Self {
        Self(column)
    }

    /// Get the raw usize value.
    pub fn get(&self) -> usize {
        self.0
    }
}

/// Position of an item in the flat ordered sequence. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Create a new ItemIndex from a raw value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw usize value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Row containing this item for the given column count.
    ///
    /// A column count of zero is treated as one.
    pub fn row(&self, column_count: u32) -> RowIndex {
        RowIndex(self.0 / column_count.max(1) as usize)
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Pixel rectangle of a grid cell, relative to the top-left of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    /// Left edge.
    pub x: u64,
    /// Top edge.
    pub y: u64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl BoundingBox {
    /// Create a bounding box.
    pub fn new(x: u64, y: u64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> u64 {
        self.y + u64::from(self.height)
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> u64 {
        self.x + u64::from(self.width)
    }
}
