//! Header and status bar.

use super::styles::GridStyles;
use crate::grid::LayoutMode;
use crate::state::{AppState, InputMode};
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

const KEY_HINTS: &str =
    "j/k scroll  f jump  s size  p progress  t title  m monitored  Q quality  o sort  v table  q quit";

/// Summary of the layout inputs: item count, columns, size class, sort key
/// and mode.
pub fn header_text(state: &AppState) -> String {
    let grid = state.grid();
    let inputs = grid.inputs();
    let sort = inputs
        .sort_key
        .as_ref()
        .map(|key| key.as_str())
        .unwrap_or("none");
    let mode = match inputs.mode {
        LayoutMode::Posters => "posters",
        LayoutMode::Table => "table",
    };
    let screen = if inputs.is_small_screen { " | small screen" } else { "" };
    format!(
        " postergrid | {} items | {} cols | size {} | sort {} | {}{}",
        grid.item_count(),
        grid.geometry().column_count,
        inputs.options.size_class.as_str(),
        sort,
        mode,
        screen,
    )
}

/// Visible row range, 1-based, e.g. `rows 3-7 of 12`.
pub fn position_text(state: &AppState) -> String {
    let grid = state.grid();
    match grid.visible_window() {
        Some(window) => format!(
            "rows {}-{} of {} ",
            window.first_row.get() + 1,
            window.last_row.get() + 1,
            grid.row_count()
        ),
        None => String::new(),
    }
}

/// Jump prompt listing every character with at least one item.
pub fn jump_prompt(state: &AppState) -> String {
    let characters: Vec<String> = state
        .grid()
        .jump_characters()
        .iter()
        .map(char::to_string)
        .collect();
    format!(" Jump to: {}  (Esc cancels)", characters.join(" "))
}

/// Render the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &GridStyles) {
    let header = Paragraph::new(header_text(state)).style(styles.header);
    frame.render_widget(header, area);
}

/// Render the status bar: the jump prompt in jump mode, otherwise the last
/// status message (or key hints) with the visible row range on the right.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &GridStyles) {
    if state.input_mode == InputMode::Jump {
        frame.render_widget(Paragraph::new(jump_prompt(state)).style(styles.jump), area);
        return;
    }

    let left = match &state.status {
        Some(message) => format!(" {message}"),
        None => format!(" {KEY_HINTS}"),
    };
    frame.render_widget(Paragraph::new(left).style(styles.status), area);

    let position = position_text(state);
    if !position.is_empty() {
        let line = Line::from(position).right_aligned();
        frame.render_widget(Paragraph::new(line).style(styles.status), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolvedConfig;
    use crate::grid::GridEvent;
    use crate::model::{Item, SortKey};
    use crate::state::start_jump;

    fn state() -> AppState {
        let items = ["abba", "beatles", "blur", "cream", "10cc"]
            .iter()
            .enumerate()
            .map(|(i, name)| Item::new(i as u64, *name))
            .collect();
        AppState::new(items, &ResolvedConfig::default()).resize(100, 40)
    }

    #[test]
    fn header_summarizes_layout() {
        let text = header_text(&state());
        assert_eq!(
            text,
            " postergrid | 5 items | 6 cols | size medium | sort none | posters"
        );
    }

    #[test]
    fn header_shows_sort_key_and_small_screen() {
        let state = state().dispatch([
            GridEvent::SortKeyChanged(Some(SortKey::SizeOnDisk)),
            GridEvent::SmallScreenChanged(true),
        ]);
        let text = header_text(&state);
        assert!(text.contains("sort sizeOnDisk"));
        assert!(text.ends_with("| small screen"));
    }

    #[test]
    fn position_reports_visible_rows() {
        assert_eq!(position_text(&state()), "rows 1-1 of 1 ");
    }

    #[test]
    fn position_is_empty_before_measurement() {
        let state = AppState::new(vec![Item::new(1, "a")], &ResolvedConfig::default());
        assert_eq!(position_text(&state), "");
    }

    #[test]
    fn jump_prompt_lists_characters_in_order() {
        let state = start_jump(state());
        assert_eq!(jump_prompt(&state), " Jump to: a b c #  (Esc cancels)");
    }
}
