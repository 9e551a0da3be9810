//! Application state and transitions.
//!
//! AppState is the root state type of the terminal host. It owns the item
//! list, the grid, and the pieces of host state the grid treats as external:
//! the scroll container and the terminal measurement.
//!
//! The terminal is measured in cells while the grid works in pixels. Each
//! terminal column stands for `pixels_per_column` pixels and each line for
//! `pixels_per_row` pixels.

use crate::config::ResolvedConfig;
use crate::grid::{
    GridConfig, GridEvent, LayoutMode, MeasurementAdapter, PosterGrid, ScrollContainer,
    UpdateOutcome, ViewportMeasure,
};
use crate::model::Item;
use tracing::debug;

/// How keystrokes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys go through the key bindings.
    #[default]
    Normal,
    /// The next character typed is a jump target.
    Jump,
}

/// Scroll position of the host's scroll container.
///
/// With external binding the grid mirrors this offset and sends commands
/// back; with internal binding it is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostScroll {
    offset: u64,
}

impl ScrollContainer for HostScroll {
    fn scroll_offset(&self) -> u64 {
        self.offset
    }

    fn scroll_to(&mut self, offset: u64) {
        self.offset = offset;
    }
}

/// Size of the grid area in terminal cells, scaled to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalViewport {
    /// Width in terminal columns.
    pub columns: u16,
    /// Height in terminal lines.
    pub lines: u16,
    /// Pixels per terminal column.
    pub pixels_per_column: u32,
    /// Pixels per terminal line.
    pub pixels_per_row: u32,
}

impl ViewportMeasure for TerminalViewport {
    fn measure_width(&self) -> Option<u32> {
        (self.columns > 0)
            .then(|| u32::from(self.columns).saturating_mul(self.pixels_per_column))
    }

    fn viewport_height(&self) -> Option<u32> {
        Some(u32::from(self.lines).saturating_mul(self.pixels_per_row))
    }
}

/// Grid construction parameters from resolved configuration.
pub fn grid_config(config: &ResolvedConfig) -> GridConfig {
    GridConfig {
        dimensions: config.dimensions,
        overscan_count: config.overscan_count,
        options: config.options,
        sort_key: config.sort_key.clone(),
        is_small_screen: config.small_screen,
        mode: if config.table_mode {
            LayoutMode::Table
        } else {
            LayoutMode::Posters
        },
    }
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    items: Vec<Item>,
    grid: PosterGrid,
    adapter: MeasurementAdapter,
    container: HostScroll,
    last_outcome: UpdateOutcome,
    content_epoch: u64,

    /// Normal key handling or waiting for a jump character.
    pub input_mode: InputMode,

    /// Pixels per terminal column.
    pub pixels_per_column: u32,

    /// Pixels per terminal line.
    pub pixels_per_row: u32,

    /// One-line message for the status bar (e.g. a jump miss).
    pub status: Option<String>,
}

impl AppState {
    /// State for an item list under a configuration. Nothing is measured yet.
    pub fn new(items: Vec<Item>, config: &ResolvedConfig) -> Self {
        let (grid, last_outcome) =
            PosterGrid::new(grid_config(config)).update_with_items(&items, []);
        Self {
            items,
            grid,
            adapter: MeasurementAdapter::new(),
            container: HostScroll::default(),
            last_outcome,
            content_epoch: 0,
            input_mode: InputMode::Normal,
            pixels_per_column: config.pixels_per_column.max(1),
            pixels_per_row: config.pixels_per_row.max(1),
            status: None,
        }
    }

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The grid.
    pub fn grid(&self) -> &PosterGrid {
        &self.grid
    }

    /// Outcome of the most recent update.
    pub fn last_outcome(&self) -> &UpdateOutcome {
        &self.last_outcome
    }

    /// Offset of the host scroll container.
    pub fn container_offset(&self) -> u64 {
        self.container.scroll_offset()
    }

    /// Bumped whenever cell content changes without a layout change, so
    /// renderers know to drop cached cells the grid still considers valid.
    pub fn content_epoch(&self) -> u64 {
        self.content_epoch
    }

    /// Mark cell content as changed.
    pub fn bump_content_epoch(&mut self) {
        self.content_epoch += 1;
    }

    /// Replace the item list.
    ///
    /// Cell content is always marked as changed, even when the grid keeps its
    /// layout generation because the ids are unchanged.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        let mut events = Vec::new();
        events.extend(self.adapter.on_scroll(self.grid.binding(), &self.container));
        let (grid, outcome) = self.grid.update_with_items(&items, events);
        self.items = items;
        self.grid = grid;
        // same ids can carry new titles or annotations
        self.bump_content_epoch();
        self.finish_update(outcome)
    }

    /// Run one grid update with the given events.
    ///
    /// The container's offset is reported first, so relative scrolling in the
    /// same update starts from where the container actually is.
    pub fn dispatch(mut self, events: impl IntoIterator<Item = GridEvent>) -> Self {
        let mut all: Vec<GridEvent> = self
            .adapter
            .on_scroll(self.grid.binding(), &self.container)
            .into_iter()
            .collect();
        all.extend(events);
        let (grid, outcome) = self.grid.update(all);
        self.grid = grid;
        self.finish_update(outcome)
    }

    /// Report a new grid area size in terminal cells.
    pub fn resize(mut self, columns: u16, lines: u16) -> Self {
        let viewport = TerminalViewport {
            columns,
            lines,
            pixels_per_column: self.pixels_per_column,
            pixels_per_row: self.pixels_per_row,
        };
        let events = self.adapter.on_resize(&viewport);
        if events.is_empty() {
            return self;
        }
        debug!(columns, lines, "Grid area resized");
        self.dispatch(events)
    }

    fn finish_update(mut self, outcome: UpdateOutcome) -> Self {
        self.adapter.apply(&outcome, &mut self.container);
        self.last_outcome = outcome;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new(), &ResolvedConfig::default())
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
