//! Tests for the update cycle.

use super::*;
use crate::grid::types::{ColumnIndex, RowIndex};
use crate::model::{Item, SizeClass};
use std::cell::Cell as Counter;

/// `count` items; only item 9 starts with 'q'.
fn items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let label = if i == 9 {
                "quark".to_string()
            } else {
                format!("a{i:03}")
            };
            Item::new(i as u64, label)
        })
        .collect()
}

fn large() -> DisplayOptions {
    DisplayOptions::default().with_size_class(SizeClass::Large)
}

fn config(is_small_screen: bool) -> GridConfig {
    GridConfig {
        options: large(),
        is_small_screen,
        ..GridConfig::default()
    }
}

/// 700px wide, 600px viewport, 100 items. Four 175px columns, 189px rows.
fn measured_grid() -> PosterGrid {
    let (grid, _) = PosterGrid::new(config(false)).update_with_items(
        &items(100),
        [GridEvent::Measured(Some(700)), GridEvent::ViewportHeight(600)],
    );
    grid
}

mod lifecycle {
    use super::*;

    #[test]
    fn new_grid_is_not_renderable() {
        let grid = PosterGrid::new(config(false));
        assert!(!grid.is_renderable());
        assert_eq!(grid.visible_window(), None);
        assert!(grid.cells().is_empty());
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn first_measurement_lays_out_and_invalidates() {
        let (grid, outcome) = PosterGrid::new(config(false)).update_with_items(
            &items(100),
            [GridEvent::Measured(Some(700)), GridEvent::ViewportHeight(600)],
        );

        assert_eq!(outcome.invalidated, Some(InvalidationReason::Width));
        assert_eq!(grid.generation(), 1);
        assert_eq!(grid.geometry().column_width, 175);
        assert_eq!(grid.geometry().column_count, 4);
        assert_eq!(grid.geometry().row_height, 189);
        assert_eq!(grid.row_count(), 25);
        assert_eq!(grid.max_scroll_offset(), 25 * 189 - 600);
    }

    #[test]
    fn window_at_top_includes_trailing_overscan_only() {
        let window = measured_grid().visible_window().unwrap();
        assert_eq!(window.first_row, RowIndex::new(0));
        assert_eq!(window.last_row, RowIndex::new(3));
        assert_eq!(window.overscan_first_row, RowIndex::new(0));
        assert_eq!(window.overscan_last_row, RowIndex::new(5));
    }

    #[test]
    fn unknown_width_suppresses_rendering() {
        let (grid, outcome) = measured_grid().apply(GridEvent::Measured(None));
        assert_eq!(outcome.invalidated, Some(InvalidationReason::Width));
        assert_eq!(outcome.window, None);
        assert!(!grid.is_renderable());
        assert!(grid.cells().is_empty());
    }

    #[test]
    fn empty_sequence_renders_nothing() {
        let (grid, outcome) = PosterGrid::new(config(false)).update_with_items(
            &Vec::<Item>::new(),
            [GridEvent::Measured(Some(700)), GridEvent::ViewportHeight(600)],
        );
        assert!(grid.is_renderable());
        assert_eq!(outcome.window, None);
        assert_eq!(grid.row_count(), 0);
    }
}

mod invalidation {
    use super::*;

    #[test]
    fn update_without_changes_is_idempotent() {
        let grid = measured_grid();
        let (again, outcome) = grid.clone().update([]);
        assert_eq!(outcome.invalidated, None);
        assert_eq!(again, grid);
    }

    #[test]
    fn same_items_do_not_invalidate() {
        let grid = measured_grid();
        let generation = grid.generation();
        let (grid, outcome) = grid.update_with_items(&items(100), []);
        assert_eq!(outcome.invalidated, None);
        assert_eq!(grid.generation(), generation);
    }

    #[test]
    fn reordered_items_invalidate() {
        let mut reversed = items(100);
        reversed.reverse();
        let grid = measured_grid();
        let generation = grid.generation();

        let (grid, outcome) = grid.update_with_items(&reversed, []);
        assert_eq!(outcome.invalidated, Some(InvalidationReason::Items));
        assert_eq!(grid.generation(), generation + 1);
        assert_eq!(grid.item_id(ItemIndex::new(0)), Some(ItemId::new(99)));
    }

    #[test]
    fn options_change_at_same_width_invalidates_geometry() {
        let (grid, outcome) =
            measured_grid().apply(GridEvent::OptionsChanged(large().toggle_title()));
        assert_eq!(outcome.invalidated, Some(InvalidationReason::Geometry));
        assert_eq!(grid.geometry().row_height, 189 + 19);
    }

    #[test]
    fn sort_key_without_annotation_line_keeps_cache() {
        let (_, outcome) = measured_grid().apply(GridEvent::SortKeyChanged(Some(SortKey::Status)));
        assert_eq!(outcome.invalidated, None);
    }

    #[test]
    fn width_change_reported_before_item_change() {
        let mut reversed = items(100);
        reversed.reverse();
        let (_, outcome) =
            measured_grid().update_with_items(&reversed, [GridEvent::Measured(Some(546))]);
        assert_eq!(outcome.invalidated, Some(InvalidationReason::Width));
    }
}

mod navigation {
    use super::*;

    #[test]
    fn jump_scrolls_item_row_to_top() {
        // item 9 / 4 columns = row 2
        let (grid, outcome) = measured_grid().apply(GridEvent::JumpToCharacter('Q'));
        assert_eq!(outcome.scroll_command, Some(ScrollCommand::new(2 * 189)));
        assert_eq!(grid.scroll_offset(), 378);
        assert_eq!(outcome.window.unwrap().first_row, RowIndex::new(2));
    }

    #[test]
    fn jump_uses_geometry_from_the_same_update() {
        // 546 is an exact multiple of 182: three 182px columns, 196px rows,
        // so item 9 lands on row 3 rather than row 2
        let (grid, outcome) = measured_grid().update([
            GridEvent::Measured(Some(546)),
            GridEvent::JumpToCharacter('q'),
        ]);
        assert_eq!(grid.geometry().column_count, 3);
        assert_eq!(grid.geometry().row_height, 196);
        assert_eq!(outcome.scroll_command, Some(ScrollCommand::new(3 * 196)));
    }

    #[test]
    fn jump_before_resize_in_event_order_still_uses_new_geometry() {
        let (_, outcome) = measured_grid().update([
            GridEvent::JumpToCharacter('q'),
            GridEvent::Measured(Some(546)),
        ]);
        assert_eq!(outcome.scroll_command, Some(ScrollCommand::new(588)));
    }

    #[test]
    fn jump_without_match_does_nothing() {
        let grid = measured_grid();
        let (after, outcome) = grid.clone().apply(GridEvent::JumpToCharacter('z'));
        assert_eq!(outcome.scroll_command, None);
        assert_eq!(after.scroll_offset(), grid.scroll_offset());
    }

    #[test]
    fn later_target_supersedes_earlier_one() {
        let (_, outcome) = measured_grid().update([
            GridEvent::JumpToCharacter('q'),
            GridEvent::ScrollToPosition(1000),
        ]);
        assert_eq!(outcome.scroll_command, Some(ScrollCommand::new(1000)));
    }

    #[test]
    fn zero_position_is_ignored() {
        let (_, outcome) = measured_grid().apply(GridEvent::ScrollToPosition(0));
        assert_eq!(outcome.scroll_command, None);
    }

    #[test]
    fn scroll_to_item_near_end_clamps() {
        let (grid, outcome) = measured_grid().apply(GridEvent::ScrollToItem(ItemIndex::new(99)));
        assert_eq!(outcome.scroll_command, Some(ScrollCommand::new(grid.max_scroll_offset())));
        let window = outcome.window.unwrap();
        assert_eq!(window.last_row, RowIndex::new(24));
        assert_eq!(window.overscan_last_row, RowIndex::new(24));
    }

    #[test]
    fn jump_characters_follow_item_order() {
        assert_eq!(measured_grid().jump_characters(), &['a', 'q']);
    }
}

mod scrolling {
    use super::*;

    #[test]
    fn observed_offset_moves_window_without_command() {
        let (grid, outcome) = measured_grid().apply(GridEvent::Scrolled(378));
        assert_eq!(outcome.scroll_command, None);
        assert_eq!(grid.scroll_offset(), 378);
        let window = outcome.window.unwrap();
        assert_eq!(window.first_row, RowIndex::new(2));
        assert_eq!(window.overscan_first_row, RowIndex::new(0));
    }

    #[test]
    fn scroll_by_clamps_to_bounds() {
        let (grid, outcome) = measured_grid().apply(GridEvent::ScrollBy(100_000));
        assert_eq!(grid.scroll_offset(), 4125);
        assert_eq!(outcome.scroll_command, Some(ScrollCommand::new(4125)));

        let (grid, _) = grid.apply(GridEvent::ScrollBy(-200_000));
        assert_eq!(grid.scroll_offset(), 0);
    }

    #[test]
    fn scroll_deltas_in_one_update_accumulate() {
        let (grid, _) =
            measured_grid().update([GridEvent::ScrollBy(100), GridEvent::ScrollBy(50)]);
        assert_eq!(grid.scroll_offset(), 150);
    }

    #[test]
    fn small_screen_scrolls_internally() {
        // 700 / 172 = 4 rem 12 -> 700 / 5 = 140px columns, 159px rows
        let (grid, outcome) = PosterGrid::new(config(true)).update_with_items(
            &items(100),
            [
                GridEvent::Measured(Some(700)),
                GridEvent::ViewportHeight(600),
                GridEvent::JumpToCharacter('q'),
            ],
        );
        assert_eq!(grid.binding(), ScrollBinding::Internal);
        assert_eq!(outcome.scroll_command, None);
        assert_eq!(grid.scroll_offset(), 159);
    }

    #[test]
    fn small_screen_change_switches_binding() {
        let (grid, _) = measured_grid().apply(GridEvent::SmallScreenChanged(true));
        assert_eq!(grid.binding(), ScrollBinding::Internal);
        let (grid, _) = grid.apply(GridEvent::SmallScreenChanged(false));
        assert_eq!(grid.binding(), ScrollBinding::External);
    }

    #[test]
    fn rebinding_externally_hands_offset_to_container() {
        let (grid, _) = PosterGrid::new(config(true)).update_with_items(
            &items(100),
            [GridEvent::Measured(Some(700)), GridEvent::ViewportHeight(600)],
        );
        let (grid, _) = grid.apply(GridEvent::ScrollBy(1000));

        let (grid, outcome) = grid.apply(GridEvent::SmallScreenChanged(false));
        assert_eq!(grid.binding(), ScrollBinding::External);
        assert_eq!(grid.scroll_offset(), 1000);
        assert_eq!(outcome.scroll_command, Some(ScrollCommand::new(1000)));
    }

    #[test]
    fn unchanged_binding_sends_no_command() {
        let (grid, outcome) = measured_grid().apply(GridEvent::SmallScreenChanged(false));
        assert_eq!(grid.binding(), ScrollBinding::External);
        assert_eq!(outcome.scroll_command, None);
    }
}

mod rendering {
    use super::*;

    fn ten_items() -> PosterGrid {
        let (grid, _) = PosterGrid::new(config(false)).update_with_items(
            &items(10),
            [GridEvent::Measured(Some(700)), GridEvent::ViewportHeight(600)],
        );
        grid
    }

    #[test]
    fn trailing_cells_of_last_row_are_blank() {
        let cells = ten_items().cells();
        assert_eq!(cells.len(), 12);
        let blanks: Vec<_> = cells.iter().filter(|c| c.item_index.is_none()).collect();
        assert_eq!(blanks.len(), 2);
        assert!(blanks.iter().all(|c| c.row == RowIndex::new(2)));
        assert_eq!(blanks[0].column, ColumnIndex::new(2));
        assert_eq!(blanks[0].bounds.x, 350);
        assert_eq!(blanks[0].bounds.y, 2 * 189);
    }

    #[test]
    fn render_callback_sees_every_cell() {
        let rendered = ten_items().render_cells(|cell| cell.item_index.map(|i| i.get()));
        let items: Vec<_> = rendered.iter().filter_map(|r| r.content).collect();
        assert_eq!(items, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn cached_render_only_runs_on_miss() {
        let grid = ten_items();
        let mut cache = RenderCache::new(64);
        let calls = Counter::new(0);
        let render = |cell: &Cell| {
            calls.set(calls.get() + 1);
            cell.item_index.map(|i| i.get())
        };

        grid.render_cells_cached(&mut cache, render);
        grid.render_cells_cached(&mut cache, render);
        assert_eq!(calls.get(), 12);
        assert_eq!(cache.generation(), grid.generation());
    }

    #[test]
    fn invalidation_discards_cached_cells() {
        let grid = ten_items();
        let mut cache = RenderCache::new(64);
        let calls = Counter::new(0);
        let render = |cell: &Cell| {
            calls.set(calls.get() + 1);
            cell.item_index.map(|i| i.get())
        };
        grid.render_cells_cached(&mut cache, render);

        // three columns, four rows, all visible
        let (grid, _) = grid.apply(GridEvent::Measured(Some(546)));
        let rendered = grid.render_cells_cached(&mut cache, render);
        assert_eq!(calls.get(), 24);
        assert_eq!(rendered[3].content, Some(3));
        assert_eq!(rendered[3].cell.row, RowIndex::new(1));
    }
}
