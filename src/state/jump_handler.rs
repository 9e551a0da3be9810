//! Jump-to-character handler.
//!
//! `f` enters jump mode; the next printable character scrolls to the first
//! item whose label starts with it. Esc leaves jump mode without moving.

use crate::grid::GridEvent;
use crate::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Enter jump mode.
pub fn start_jump(mut state: AppState) -> AppState {
    state.input_mode = InputMode::Jump;
    state.status = None;
    state
}

/// Leave jump mode without jumping.
pub fn cancel_jump(mut state: AppState) -> AppState {
    state.input_mode = InputMode::Normal;
    state
}

/// Handle a key while in jump mode.
///
/// Printable characters jump; Esc cancels; anything else is ignored and
/// keeps jump mode active.
pub fn handle_jump_key(mut state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc => cancel_jump(state),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input_mode = InputMode::Normal;
            jump_to_character(state, c)
        }
        _ => state,
    }
}

/// Scroll to the first item starting with `character`.
///
/// A miss leaves the scroll position alone and reports it in the status bar.
pub fn jump_to_character(mut state: AppState, character: char) -> AppState {
    if state.grid().first_item_for(character).is_none() {
        debug!(%character, "No item for jump character");
        state.status = Some(format!("No items start with '{character}'"));
        return state;
    }
    state.status = None;
    state.dispatch([GridEvent::JumpToCharacter(character)])
}
