//! Vertical scrolling keyboard action handler.
//!
//! Pure functions that transform AppState in response to scroll actions.
//! Line scrolling moves by one terminal line, row scrolling by one grid row
//! and paging by one viewport height. Clamping happens inside the grid.

use crate::grid::{GridEvent, ItemIndex};
use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a scroll keyboard action.
///
/// Returns a new AppState with the scroll action applied. Non-scroll actions
/// return the state unchanged.
pub fn handle_scroll_action(state: AppState, action: KeyAction) -> AppState {
    let line = i64::from(state.pixels_per_row);
    let row = i64::from(state.grid().geometry().row_height);
    let page = i64::from(state.grid().viewport_height()).max(line);

    let event = match action {
        KeyAction::ScrollUp => GridEvent::ScrollBy(-line),
        KeyAction::ScrollDown => GridEvent::ScrollBy(line),
        KeyAction::RowUp => GridEvent::ScrollBy(-row),
        KeyAction::RowDown => GridEvent::ScrollBy(row),
        KeyAction::PageUp => GridEvent::ScrollBy(-page),
        KeyAction::PageDown => GridEvent::ScrollBy(page),
        KeyAction::ScrollToTop => GridEvent::ScrollToItem(ItemIndex::new(0)),
        KeyAction::ScrollToBottom => {
            let last = state.grid().item_count().saturating_sub(1);
            GridEvent::ScrollToItem(ItemIndex::new(last))
        }
        _ => return state,
    };

    state.dispatch([event])
}
