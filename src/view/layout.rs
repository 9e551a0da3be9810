//! Screen layout: header, grid, status bar.

use super::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use super::grid_view::{self, CellLines};
use super::status_bar;
use super::styles::GridStyles;
use crate::grid::RenderCache;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Split the frame into header, grid and status bar areas.
pub fn split(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Area the grid is drawn into; this is what gets measured.
pub fn grid_area(area: Rect) -> Rect {
    split(area).1
}

/// Render the whole screen.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    cache: &mut RenderCache<CellLines>,
    styles: &GridStyles,
) {
    let (header_area, grid_area, status_area) = split(frame.area());
    status_bar::render_header(frame, header_area, state, styles);
    grid_view::render_grid(frame, grid_area, state, cache, styles);
    status_bar::render_status_bar(frame, status_area, state, styles);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_takes_everything_between_the_bars() {
        let (header, grid, status) = split(Rect::new(0, 0, 100, 42));
        assert_eq!(header, Rect::new(0, 0, 100, 1));
        assert_eq!(grid, Rect::new(0, 1, 100, 40));
        assert_eq!(status, Rect::new(0, 41, 100, 1));
    }

    #[test]
    fn tiny_terminal_leaves_empty_grid() {
        let grid = grid_area(Rect::new(0, 0, 20, 2));
        assert_eq!(grid.height, 0);
    }
}
