//! Update-cycle state machine tying the grid components together.
//!
//! [`PosterGrid::update`] is the only way state changes. One call is one
//! logical update, and its phases always run in this order:
//!
//! 1. fold the events (latest value wins, later scroll targets supersede
//!    earlier ones)
//! 2. recompute geometry
//! 3. compare against the previous geometry and item identities, bumping the
//!    layout generation on any change
//! 4. adopt scroll offsets reported by the scroll container
//! 5. consume the pending scroll target against the new geometry, or hand
//!    the current offset to a scroll container that just became bound
//! 6. compute the visible window
//!
//! Row and column math in step 5 therefore always uses the column count
//! produced in step 2 of the same update.

use super::cache::{CellKey, RenderCache};
use super::geometry::ViewportGeometry;
use super::invalidation::{self, InvalidationReason, ItemSnapshot};
use super::layout::{LayoutEvent, LayoutInputs, LayoutMode, LayoutState};
use super::measurement::{ScrollBinding, ScrollCommand};
use super::navigation::{CharacterIndex, NavigationController};
use super::dimensions::LayoutDimensions;
use super::types::ItemIndex;
use super::window::{Cell, VisibleWindow, WindowingEngine, DEFAULT_OVERSCAN_COUNT};
use super::GridItem;
use crate::model::{DisplayOptions, ItemId, SortKey};
use tracing::{debug, info};

/// Something that happened since the last update.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// Width measurement. `None` or `Some(0)` means not yet laid out.
    Measured(Option<u32>),
    /// Height of the scroll container's viewport.
    ViewportHeight(u32),
    /// The scroll container reports its current offset.
    Scrolled(u64),
    /// Scroll relative to the current offset (wheel, keys).
    ScrollBy(i64),
    /// Display options replaced.
    OptionsChanged(DisplayOptions),
    /// Sort key changed.
    SortKeyChanged(Option<SortKey>),
    /// Small-screen flag changed. Also switches the scroll binding.
    SmallScreenChanged(bool),
    /// Poster grid or table.
    ModeChanged(LayoutMode),
    /// Jump to the first item starting with a character.
    JumpToCharacter(char),
    /// Externally driven absolute scroll position.
    ScrollToPosition(u64),
    /// Scroll an item's row to the top.
    ScrollToItem(ItemIndex),
}

/// What one update did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// Why cached cell output was discarded, if it was.
    pub invalidated: Option<InvalidationReason>,
    /// Offset the external scroll container must move to.
    ///
    /// Only set with [`ScrollBinding::External`]; with internal binding the
    /// grid already owns the offset.
    pub scroll_command: Option<ScrollCommand>,
    /// Rows to render after the update.
    pub window: Option<VisibleWindow>,
}

/// Construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Fixed pixel bands.
    pub dimensions: LayoutDimensions,
    /// Rows rendered beyond each viewport edge.
    pub overscan_count: usize,
    /// Initial display options.
    pub options: DisplayOptions,
    /// Initial sort key.
    pub sort_key: Option<SortKey>,
    /// Initial small-screen flag.
    pub is_small_screen: bool,
    /// Initial layout mode.
    pub mode: LayoutMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dimensions: LayoutDimensions::default(),
            overscan_count: DEFAULT_OVERSCAN_COUNT,
            options: DisplayOptions::default(),
            sort_key: None,
            is_small_screen: false,
            mode: LayoutMode::Posters,
        }
    }
}

/// Cell plus whatever the render callback produced for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell<R> {
    /// The cell.
    pub cell: Cell,
    /// Render output; `None` renders as blank space of the cell's size.
    pub content: Option<R>,
}

/// Virtualized poster grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterGrid {
    layout: LayoutState,
    engine: WindowingEngine,
    navigation: NavigationController,
    items: ItemSnapshot,
    characters: CharacterIndex,
    binding: ScrollBinding,
    generation: u64,
}

impl PosterGrid {
    /// Empty, unmeasured grid.
    pub fn new(config: GridConfig) -> Self {
        let inputs = LayoutInputs {
            width: 0,
            is_small_screen: config.is_small_screen,
            sort_key: config.sort_key,
            options: config.options,
            mode: config.mode,
        };
        let layout = LayoutState::new(inputs, config.dimensions);
        let engine = WindowingEngine::new(layout.geometry(), config.overscan_count);
        Self {
            layout,
            engine,
            navigation: NavigationController::new(),
            items: ItemSnapshot::default(),
            characters: CharacterIndex::default(),
            binding: ScrollBinding::for_screen(config.is_small_screen),
            generation: 0,
        }
    }

    /// Run one update cycle with the item sequence unchanged.
    pub fn update(self, events: impl IntoIterator<Item = GridEvent>) -> (Self, UpdateOutcome) {
        self.run_cycle(None, events)
    }

    /// Run one update cycle with a (possibly) new item sequence.
    ///
    /// `items` is only read during this call; the grid keeps its identifiers
    /// and leading characters, never the items.
    pub fn update_with_items<I: GridItem>(
        self,
        items: &[I],
        events: impl IntoIterator<Item = GridEvent>,
    ) -> (Self, UpdateOutcome) {
        let snapshot = ItemSnapshot::capture(items.iter().map(GridItem::item_id));
        let characters = CharacterIndex::build(items.iter().map(GridItem::sort_label));
        self.run_cycle(Some((snapshot, characters)), events)
    }

    /// Apply a single event.
    pub fn apply(self, event: GridEvent) -> (Self, UpdateOutcome) {
        self.update([event])
    }

    fn run_cycle(
        mut self,
        next_items: Option<(ItemSnapshot, CharacterIndex)>,
        events: impl IntoIterator<Item = GridEvent>,
    ) -> (Self, UpdateOutcome) {
        let prev_geometry = self.layout.geometry();
        let prev_binding = self.binding;
        let mut layout = self.layout;
        let mut viewport_height = None;
        let mut observed_offset = None;
        let mut scroll_delta: i64 = 0;
        let mut navigation_events = Vec::new();

        // 1 + 2: fold events; layout recomputes on every input change
        for event in events {
            match event {
                GridEvent::Measured(width) => {
                    layout = layout.apply(LayoutEvent::Measured(width.unwrap_or(0)));
                }
                GridEvent::OptionsChanged(options) => {
                    layout = layout.apply(LayoutEvent::OptionsChanged(options));
                }
                GridEvent::SortKeyChanged(sort_key) => {
                    layout = layout.apply(LayoutEvent::SortKeyChanged(sort_key));
                }
                GridEvent::SmallScreenChanged(small) => {
                    layout = layout.apply(LayoutEvent::SmallScreenChanged(small));
                    self.binding = ScrollBinding::for_screen(small);
                }
                GridEvent::ModeChanged(mode) => {
                    layout = layout.apply(LayoutEvent::ModeChanged(mode));
                }
                GridEvent::ViewportHeight(height) => viewport_height = Some(height),
                GridEvent::Scrolled(offset) => observed_offset = Some(offset),
                GridEvent::ScrollBy(delta) => scroll_delta = scroll_delta.saturating_add(delta),
                GridEvent::JumpToCharacter(_)
                | GridEvent::ScrollToPosition(_)
                | GridEvent::ScrollToItem(_) => navigation_events.push(event),
            }
        }
        self.layout = layout;
        let geometry = self.layout.geometry();

        // 3: invalidation
        let items_changed = match next_items {
            Some((snapshot, characters)) => {
                let changed = self.items.must_invalidate(&snapshot);
                self.items = snapshot;
                self.characters = characters;
                changed
            }
            None => false,
        };
        let invalidated = invalidation::detect(&prev_geometry, &geometry, items_changed);
        if let Some(reason) = invalidated {
            self.generation += 1;
            info!(
                ?reason,
                generation = self.generation,
                columns = geometry.column_count,
                items = self.items.len(),
                "Grid invalidated"
            );
        }
        self.engine.set_geometry(geometry);
        self.engine.set_item_count(self.items.len());
        if let Some(height) = viewport_height {
            self.engine.set_viewport_height(height);
        }

        // 4: scroll state from the container, then relative scrolling
        let mut scroll_command = None;
        if let Some(offset) = observed_offset {
            self.engine.set_scroll_offset(offset);
        }
        if scroll_delta != 0 {
            let current = self.engine.clamped_scroll_offset();
            let offset = current
                .saturating_add_signed(scroll_delta)
                .min(self.engine.max_scroll_offset());
            self.engine.set_scroll_offset(offset);
            scroll_command = Some(ScrollCommand::new(offset));
        }

        // 5: navigation against the new geometry
        for event in navigation_events {
            match event {
                GridEvent::JumpToCharacter(character) => {
                    self.navigation.jump_to_character(character, &self.characters);
                }
                GridEvent::ScrollToPosition(offset) => {
                    self.navigation
                        .scroll_to_position(offset, self.engine.scroll_offset());
                }
                GridEvent::ScrollToItem(item) => self.navigation.scroll_to_item(item),
                _ => {}
            }
        }
        if let Some(offset) = self.navigation.apply_pending(&mut self.engine) {
            scroll_command = Some(ScrollCommand::new(offset));
        }
        // a newly bound container has not seen the internally managed offset
        if prev_binding == ScrollBinding::Internal
            && self.binding == ScrollBinding::External
            && scroll_command.is_none()
        {
            let offset = self.engine.clamped_scroll_offset();
            self.engine.set_scroll_offset(offset);
            scroll_command = Some(ScrollCommand::new(offset));
        }

        // 6: window
        let window = self.visible_window();
        if scroll_command.is_some() {
            debug!(?window, offset = self.engine.scroll_offset(), "Scrolled");
        }

        let outcome = UpdateOutcome {
            invalidated,
            scroll_command: scroll_command.filter(|_| self.binding == ScrollBinding::External),
            window,
        };
        (self, outcome)
    }

    /// Current geometry.
    pub fn geometry(&self) -> ViewportGeometry {
        self.layout.geometry()
    }

    /// Current layout inputs.
    pub fn inputs(&self) -> &LayoutInputs {
        self.layout.inputs()
    }

    /// Layout generation; bumped on every invalidation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Scroll binding in effect.
    pub fn binding(&self) -> ScrollBinding {
        self.binding
    }

    /// Number of items in the last sequence.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Identifier of the item at a position.
    pub fn item_id(&self, index: ItemIndex) -> Option<ItemId> {
        self.items.get(index.get())
    }

    /// Number of grid rows.
    pub fn row_count(&self) -> usize {
        self.engine.row_count()
    }

    /// Current scroll offset as last applied.
    pub fn scroll_offset(&self) -> u64 {
        self.engine.scroll_offset()
    }

    /// Scroll offset the visible window is computed from.
    pub fn effective_scroll_offset(&self) -> u64 {
        self.engine.clamped_scroll_offset()
    }

    /// Largest useful scroll offset.
    pub fn max_scroll_offset(&self) -> u64 {
        self.engine.max_scroll_offset()
    }

    /// Viewport height in pixels.
    pub fn viewport_height(&self) -> u32 {
        self.engine.viewport_height()
    }

    /// Characters with at least one item, for a jump bar.
    pub fn jump_characters(&self) -> &[char] {
        self.characters.characters()
    }

    /// First item a jump to `character` would land on.
    pub fn first_item_for(&self, character: char) -> Option<ItemIndex> {
        self.characters.index_of(character)
    }

    /// Whether rendering is possible: measured width and a viewport height.
    pub fn is_renderable(&self) -> bool {
        self.layout.is_laid_out() && self.engine.viewport_height() > 0
    }

    /// Rows to render, or `None` when rendering is suppressed or empty.
    pub fn visible_window(&self) -> Option<VisibleWindow> {
        if !self.layout.is_laid_out() {
            return None;
        }
        self.engine.compute_visible_window()
    }

    /// Every cell of the rendered band.
    pub fn cells(&self) -> Vec<Cell> {
        match self.visible_window() {
            Some(window) => self.engine.cells(&window).collect(),
            None => Vec::new(),
        }
    }

    /// Invoke `render` once per cell of the rendered band.
    pub fn render_cells<R, F>(&self, mut render: F) -> Vec<RenderedCell<R>>
    where
        F: FnMut(&Cell) -> Option<R>,
    {
        self.cells()
            .into_iter()
            .map(|cell| RenderedCell {
                content: render(&cell),
                cell,
            })
            .collect()
    }

    /// Like [`Self::render_cells`], but reuses output cached for the current
    /// layout generation and only calls `render` on a miss.
    pub fn render_cells_cached<R, F>(
        &self,
        cache: &mut RenderCache<R>,
        mut render: F,
    ) -> Vec<RenderedCell<R>>
    where
        R: Clone,
        F: FnMut(&Cell) -> Option<R>,
    {
        cache.sync(self.generation);
        self.cells()
            .into_iter()
            .map(|cell| {
                let key = CellKey::new(cell.row, cell.column);
                let content = cache.get_or_render(key, || render(&cell)).cloned();
                RenderedCell { cell, content }
            })
            .collect()
    }
}

impl Default for PosterGrid {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

#[cfg(test)]
#[path = "poster_grid_tests.rs"]
mod tests;
