//! Virtualized poster grid.
//!
//! Pure layout and windowing core. Given a measured width, display options
//! and an ordered item sequence, it derives column and row geometry, picks
//! the rows to render for a scroll offset, and turns character jumps into
//! scroll offsets. Nothing here touches a terminal; rendering happens through
//! callbacks handed a [`Cell`].

pub mod cache;
pub mod dimensions;
pub mod geometry;
pub mod invalidation;
pub mod layout;
pub mod measurement;
pub mod navigation;
pub mod poster_grid;
pub mod types;
pub mod window;

pub use cache::{CellKey, RenderCache, DEFAULT_CACHE_CAPACITY};
pub use dimensions::LayoutDimensions;
pub use geometry::ViewportGeometry;
pub use invalidation::{InvalidationReason, ItemSnapshot};
pub use layout::{LayoutEvent, LayoutInputs, LayoutMode, LayoutState};
pub use measurement::{
    MeasurementAdapter, ScrollBinding, ScrollCommand, ScrollContainer, ViewportMeasure,
};
pub use navigation::{CharacterIndex, NavigationController, ScrollTarget};
pub use poster_grid::{GridConfig, GridEvent, PosterGrid, RenderedCell, UpdateOutcome};
pub use types::{BoundingBox, ColumnIndex, ItemIndex, RowIndex};
pub use window::{Cell, VisibleWindow, WindowingEngine, DEFAULT_OVERSCAN_COUNT};

use crate::model::ItemId;

/// What the grid needs to know about an item.
///
/// Identity drives cache invalidation; the label drives character jumps.
pub trait GridItem {
    /// Stable identifier, unique within a sequence.
    fn item_id(&self) -> ItemId;

    /// Label whose first significant character is used for jumps.
    fn sort_label(&self) -> &str;
}
