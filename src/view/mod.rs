//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod grid_view;
pub mod layout;
pub mod status_bar;
mod styles;

pub use grid_view::{project_cell, truncate_to_width, CellLines, CellProjection, PixelScale};
pub use styles::{ColorConfig, GridStyles};

use crate::config::{ConfigError, KeyBindings, ResolvedConfig};
use crate::grid::RenderCache;
use crate::model::{InputError, Item, KeyAction};
use crate::source::InputSource;
use crate::state::{
    cancel_jump, handle_display_action, handle_jump_key, handle_scroll_action, start_jump,
    AppState, InputMode,
};
use constants::EVENT_POLL_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: GridStyles,
    cache: RenderCache<CellLines>,
    /// Content epoch the cache was filled under.
    last_epoch: u64,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(items: Vec<Item>, config: &ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            AppState::new(items, config),
            KeyBindings::default(),
            GridStyles::new(),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after input or a
    /// resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let poll_interval = Duration::from_millis(EVENT_POLL_INTERVAL_MS);

        self.draw()?;

        loop {
            if !event::poll(poll_interval)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    self.handle_resize(width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: GridStyles,
    ) -> Self {
        let last_epoch = app_state.content_epoch();
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
            cache: RenderCache::default(),
            last_epoch,
        }
    }

    fn update_state(&mut self, transition: impl FnOnce(AppState) -> AppState) {
        let state = std::mem::take(&mut self.app_state);
        self.app_state = transition(state);
    }

    /// Handle a key press. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.input_mode == InputMode::Jump {
            self.update_state(|state| handle_jump_key(state, key));
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            debug!(?key, "Unbound key");
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::StartJump => self.update_state(start_jump),
            KeyAction::CancelJump => self.update_state(cancel_jump),
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::RowUp
            | KeyAction::RowDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => {
                self.update_state(|state| handle_scroll_action(state, action));
            }
            KeyAction::CycleSize
            | KeyAction::ToggleDetailedProgress
            | KeyAction::ToggleTitle
            | KeyAction::ToggleMonitored
            | KeyAction::ToggleQualityProfile
            | KeyAction::CycleSortKey
            | KeyAction::ToggleTableMode
            | KeyAction::ToggleSmallScreen => {
                self.update_state(|state| handle_display_action(state, action));
            }
        }
        false
    }

    /// Measure the grid area for a terminal of the given size.
    fn handle_resize(&mut self, width: u16, height: u16) {
        let area = layout::grid_area(Rect::new(0, 0, width, height));
        self.update_state(|state| state.resize(area.width, area.height));
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.handle_resize(size.width, size.height);

        if self.app_state.content_epoch() != self.last_epoch {
            self.cache.clear();
            self.last_epoch = self.app_state.content_epoch();
        }

        let state = &self.app_state;
        let cache = &mut self.cache;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, cache, styles);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)]
impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        Self::with_terminal(
            terminal,
            app_state,
            key_bindings,
            GridStyles::with_color_config(ColorConfig::new(false)),
        )
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Load items from the input source and run the TUI until the user quits.
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(input_source: InputSource, config: ResolvedConfig) -> Result<(), TuiError> {
    let items = input_source.load()?;
    info!(items = items.len(), "Items loaded");

    let mut app = TuiApp::new(items, &config)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
