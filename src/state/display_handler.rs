//! Display option keyboard action handler.
//!
//! Each toggle replaces the grid's inputs wholesale; the grid recomputes
//! geometry and invalidates in the same update.

use crate::grid::{GridEvent, LayoutMode};
use crate::model::{KeyAction, SortKey};
use crate::state::AppState;
use tracing::info;

/// Handle a display-option action.
///
/// Non-display actions return the state unchanged.
pub fn handle_display_action(mut state: AppState, action: KeyAction) -> AppState {
    let inputs = state.grid().inputs().clone();
    let options = inputs.options;

    let event = match action {
        KeyAction::CycleSize => {
            GridEvent::OptionsChanged(options.with_size_class(options.size_class.cycle()))
        }
        KeyAction::ToggleDetailedProgress => {
            GridEvent::OptionsChanged(options.toggle_detailed_progress_bar())
        }
        KeyAction::ToggleTitle => GridEvent::OptionsChanged(options.toggle_title()),
        KeyAction::ToggleMonitored => GridEvent::OptionsChanged(options.toggle_monitored()),
        KeyAction::ToggleQualityProfile => {
            GridEvent::OptionsChanged(options.toggle_quality_profile())
        }
        KeyAction::CycleSortKey => {
            // annotations change even when the row height does not
            state.bump_content_epoch();
            GridEvent::SortKeyChanged(SortKey::cycle(inputs.sort_key.as_ref()))
        }
        KeyAction::ToggleTableMode => GridEvent::ModeChanged(match inputs.mode {
            LayoutMode::Posters => LayoutMode::Table,
            LayoutMode::Table => LayoutMode::Posters,
        }),
        KeyAction::ToggleSmallScreen => GridEvent::SmallScreenChanged(!inputs.is_small_screen),
        _ => return state,
    };

    info!(?event, "Display option changed");
    state.dispatch([event])
}
