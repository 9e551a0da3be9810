//! Layout state holder.
//!
//! Owns the inputs the geometry depends on and the geometry derived from
//! them. Every change goes through [`LayoutState::apply`], which returns a new
//! state with the geometry already recomputed, so no caller can observe new
//! inputs paired with stale geometry.

use super::dimensions::LayoutDimensions;
use super::geometry::ViewportGeometry;
use crate::model::{DisplayOptions, SortKey};
use tracing::debug;

/// How items are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Multi-column poster grid.
    #[default]
    Posters,
    /// One full-width row per item.
    Table,
}

/// Everything the geometry is a function of (besides the fixed dimensions).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LayoutInputs {
    /// Measured width. 0 until the first positive measurement.
    pub width: u32,
    /// Small-screen mode.
    pub is_small_screen: bool,
    /// Active sort key.
    pub sort_key: Option<SortKey>,
    /// Display toggles.
    pub options: DisplayOptions,
    /// Poster grid or table.
    pub mode: LayoutMode,
}

/// A change to one layout input.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    /// New width measurement.
    Measured(u32),
    /// Display options replaced wholesale.
    OptionsChanged(DisplayOptions),
    /// Sort key changed.
    SortKeyChanged(Option<SortKey>),
    /// Small-screen flag changed.
    SmallScreenChanged(bool),
    /// Layout mode changed.
    ModeChanged(LayoutMode),
}

/// Current layout inputs plus the geometry derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    inputs: LayoutInputs,
    dimensions: LayoutDimensions,
    geometry: ViewportGeometry,
}

impl LayoutState {
    /// Unmeasured layout. Geometry starts at [`ViewportGeometry::initial`].
    pub fn new(inputs: LayoutInputs, dimensions: LayoutDimensions) -> Self {
        let geometry = if inputs.width > 0 {
            compute(&inputs, &dimensions)
        } else {
            ViewportGeometry::initial(inputs.is_small_screen, &dimensions)
        };
        Self {
            inputs,
            dimensions,
            geometry,
        }
    }

    /// Current inputs.
    pub fn inputs(&self) -> &LayoutInputs {
        &self.inputs
    }

    /// Current geometry.
    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    /// Fixed dimensions in use.
    pub fn dimensions(&self) -> &LayoutDimensions {
        &self.dimensions
    }

    /// Whether a positive width has been measured.
    pub fn is_laid_out(&self) -> bool {
        self.inputs.width > 0
    }

    /// Apply one input change and recompute geometry.
    pub fn apply(self, event: LayoutEvent) -> Self {
        let mut inputs = self.inputs.clone();
        match event {
            LayoutEvent::Measured(width) => inputs.width = width,
            LayoutEvent::OptionsChanged(options) => inputs.options = options,
            LayoutEvent::SortKeyChanged(sort_key) => inputs.sort_key = sort_key,
            LayoutEvent::SmallScreenChanged(small) => inputs.is_small_screen = small,
            LayoutEvent::ModeChanged(mode) => inputs.mode = mode,
        }
        self.with_inputs(inputs)
    }

    /// Recompute for a new width and screen class.
    pub fn recalculate(self, width: u32, is_small_screen: bool) -> Self {
        let inputs = LayoutInputs {
            width,
            is_small_screen,
            ..self.inputs.clone()
        };
        self.with_inputs(inputs)
    }

    fn with_inputs(self, inputs: LayoutInputs) -> Self {
        let geometry = compute(&inputs, &self.dimensions);
        if geometry != self.geometry {
            debug!(
                width = inputs.width,
                old_columns = self.geometry.column_count,
                new_columns = geometry.column_count,
                row_height = geometry.row_height,
                "Layout geometry recomputed"
            );
        }
        Self {
            inputs,
            dimensions: self.dimensions,
            geometry,
        }
    }
}

/// Geometry for a set of inputs.
pub fn compute(inputs: &LayoutInputs, dims: &LayoutDimensions) -> ViewportGeometry {
    match inputs.mode {
        LayoutMode::Posters => ViewportGeometry::posters(
            inputs.width,
            inputs.is_small_screen,
            inputs.sort_key.as_ref(),
            &inputs.options,
            dims,
        ),
        LayoutMode::Table => ViewportGeometry::table(inputs.width, dims),
    }
}
