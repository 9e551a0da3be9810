//! Tests for character jumps and scroll targets.

use super::*;
use crate::grid::geometry::ViewportGeometry;
use crate::grid::types::RowIndex;

/// Two 100px columns, 100px rows.
fn engine(item_count: usize, viewport_height: u32) -> WindowingEngine {
    let geometry = ViewportGeometry {
        width: 200,
        column_width: 100,
        column_count: 2,
        item_width: 80,
        item_height: 80,
        row_height: 100,
    };
    let mut engine = WindowingEngine::new(geometry, 2);
    engine.set_item_count(item_count);
    engine.set_viewport_height(viewport_height);
    engine
}

mod leading_character {
    use super::*;

    #[test]
    fn skips_leading_whitespace_and_lowercases() {
        assert_eq!(leading_character("  Zeta"), Some('z'));
    }

    #[test]
    fn digits_fold_to_numeric_bucket() {
        assert_eq!(leading_character("10cc"), Some('#'));
    }

    #[test]
    fn blank_labels_have_no_character() {
        assert_eq!(leading_character(""), None);
        assert_eq!(leading_character("   "), None);
    }

    #[test]
    fn non_ascii_letters_are_lowercased() {
        assert_eq!(leading_character("Émilie"), Some('é'));
    }
}

mod character_index {
    use super::*;

    #[test]
    fn jump_to_q_resolves_to_second_item_first_row() {
        let index = CharacterIndex::build(["Alpha", "Quark", "Zeta"]);
        let item = index.index_of('Q').unwrap();
        assert_eq!(item, ItemIndex::new(1));
        assert_eq!(item.row(2), RowIndex::new(0));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let index = CharacterIndex::build(["alpha", "quark"]);
        assert_eq!(index.index_of('Q'), Some(ItemIndex::new(1)));
        assert_eq!(index.index_of('q'), Some(ItemIndex::new(1)));
    }

    #[test]
    fn returns_first_match_only() {
        let index = CharacterIndex::build(["abba", "beatles", "blur", "bowie"]);
        assert_eq!(index.index_of('b'), Some(ItemIndex::new(1)));
    }

    #[test]
    fn missing_character_is_none() {
        let index = CharacterIndex::build(["Alpha", "Quark", "Zeta"]);
        assert_eq!(index.index_of('m'), None);
    }

    #[test]
    fn numeric_bucket_matches_any_digit() {
        let index = CharacterIndex::build(["2pac", "50 cent", "abba"]);
        assert_eq!(index.index_of('#'), Some(ItemIndex::new(0)));
        assert_eq!(index.index_of('5'), Some(ItemIndex::new(0)));
    }

    #[test]
    fn characters_in_order_of_first_appearance() {
        let index = CharacterIndex::build(["2pac", "abba", "ace", "blur", "", "cream"]);
        assert_eq!(index.characters(), &['#', 'a', 'b', 'c']);
    }

    #[test]
    fn empty_sequence_has_no_characters() {
        let index = CharacterIndex::build(Vec::<&str>::new());
        assert!(index.is_empty());
    }
}

mod controller {
    use super::*;

    #[test]
    fn jump_queues_item_target() {
        let index = CharacterIndex::build(["Alpha", "Quark", "Zeta"]);
        let mut nav = NavigationController::new();
        assert_eq!(nav.jump_to_character('Q', &index), Some(ItemIndex::new(1)));
        assert_eq!(nav.pending(), Some(ScrollTarget::Item(ItemIndex::new(1))));
    }

    #[test]
    fn jump_miss_is_a_no_op() {
        let index = CharacterIndex::build(["Alpha", "Quark", "Zeta"]);
        let mut nav = NavigationController::new();
        assert_eq!(nav.jump_to_character('B', &index), None);
        assert_eq!(nav.pending(), None);
    }

    #[test]
    fn jump_miss_keeps_earlier_pending_target() {
        let index = CharacterIndex::build(["Alpha", "Quark"]);
        let mut nav = NavigationController::new();
        nav.scroll_to_item(ItemIndex::new(1));
        nav.jump_to_character('x', &index);
        assert_eq!(nav.pending(), Some(ScrollTarget::Item(ItemIndex::new(1))));
    }

    #[test]
    fn newer_target_supersedes_pending_one() {
        let index = CharacterIndex::build(["Alpha", "Quark"]);
        let mut nav = NavigationController::new();
        nav.jump_to_character('q', &index);
        assert!(nav.scroll_to_position(300, 0));
        assert_eq!(nav.pending(), Some(ScrollTarget::Offset(300)));
    }

    #[test]
    fn zero_position_is_ignored() {
        let mut nav = NavigationController::new();
        assert!(!nav.scroll_to_position(0, 500));
        assert_eq!(nav.pending(), None);
    }

    #[test]
    fn position_equal_to_current_is_ignored() {
        let mut nav = NavigationController::new();
        assert!(!nav.scroll_to_position(500, 500));
        assert_eq!(nav.pending(), None);
    }

    #[test]
    fn item_target_resolves_to_row_start() {
        let mut engine = engine(20, 250);
        let mut nav = NavigationController::new();
        nav.scroll_to_item(ItemIndex::new(9));
        assert_eq!(nav.apply_pending(&mut engine), Some(400));
        assert_eq!(engine.scroll_offset(), 400);
        assert_eq!(nav.last_applied(), Some(400));
    }

    #[test]
    fn item_target_near_end_clamps_to_max_offset() {
        // 10 rows * 100 - 250
        let mut engine = engine(20, 250);
        let mut nav = NavigationController::new();
        nav.scroll_to_item(ItemIndex::new(19));
        assert_eq!(nav.apply_pending(&mut engine), Some(750));
    }

    #[test]
    fn out_of_range_item_clamps_to_last_row() {
        let mut engine = engine(20, 250);
        let mut nav = NavigationController::new();
        nav.scroll_to_item(ItemIndex::new(500));
        assert_eq!(nav.apply_pending(&mut engine), Some(750));
    }

    #[test]
    fn offset_target_is_forwarded_verbatim() {
        let mut engine = engine(20, 250);
        let mut nav = NavigationController::new();
        nav.scroll_to_position(5000, 0);
        assert_eq!(nav.apply_pending(&mut engine), Some(5000));
        assert_eq!(engine.scroll_offset(), 5000);
        // the window still clamps
        assert_eq!(engine.clamped_scroll_offset(), 750);
    }

    #[test]
    fn target_is_consumed_once() {
        let mut engine = engine(20, 250);
        let mut nav = NavigationController::new();
        nav.scroll_to_item(ItemIndex::new(4));
        assert!(nav.apply_pending(&mut engine).is_some());
        assert_eq!(nav.apply_pending(&mut engine), None);
    }
}
