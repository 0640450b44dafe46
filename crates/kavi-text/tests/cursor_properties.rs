//! Property tests for `TextCursor` invariants.

use kavi_text::{CursorError, TextCursor};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,._-]{1,40}"
}

proptest! {
    #[test]
    fn marks_stay_sorted(text in text_strategy(), offsets in prop::collection::vec(0usize..64, 0..24)) {
        let mut cursor = TextCursor::new(&text);
        let len = cursor.len();
        for offset in offsets {
            let result = cursor.add_mark(offset).map(|_| ());
            if offset < len {
                prop_assert!(result.is_ok());
            } else {
                let is_out_of_range = matches!(result, Err(CursorError::OffsetOutOfRange { .. }));
                prop_assert!(is_out_of_range);
            }
            prop_assert!(cursor.marks().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn marked_char_peeks_never_fail(
        text in text_strategy(),
        offsets in prop::collection::vec(0usize..40, 0..10),
        steps in 0usize..16,
    ) {
        let mut cursor = TextCursor::new(&text);
        let len = cursor.len();
        cursor.set_marks(offsets.into_iter().filter(|&o| o < len)).unwrap();
        let mark_count = cursor.marks().len();
        for _ in 0..steps {
            let index = cursor.current_mark();
            prop_assert_eq!(cursor.current_marked_char().is_some(), index < mark_count);
            prop_assert_eq!(cursor.peek_next_marked_char().is_some(), index + 1 < mark_count);
            prop_assert_eq!(
                cursor.peek_previous_marked_char().is_some(),
                index > 0 && index - 1 < mark_count
            );
            cursor.set_next_mark_current();
        }
    }

    #[test]
    fn masking_preserves_length_and_untouched_chars(
        text in text_strategy(),
        offsets in prop::collection::vec(0usize..40, 0..10),
    ) {
        let original: Vec<char> = text.chars().collect();
        let offsets: Vec<usize> = offsets.into_iter().filter(|&o| o < original.len()).collect();
        let mut cursor = TextCursor::new(&text);
        cursor.mask_regions(&offsets).unwrap();

        prop_assert_eq!(cursor.len(), original.len());
        for (i, (&before, &after)) in original.iter().zip(cursor.chars()).enumerate() {
            if offsets.contains(&i) {
                prop_assert_eq!(after, ' ');
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn next_alpha_boundary_is_idempotent(text in text_strategy(), start in 0usize..40) {
        let mut cursor = TextCursor::new(&text);
        cursor.set_cursor_position(start);
        let first = cursor.move_cursor_next_alpha_boundary().cursor_position();
        let second = cursor.move_cursor_next_alpha_boundary().cursor_position();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fill_past_end_leaves_state_unchanged(text in text_strategy(), start in 0usize..40, extra in 1usize..8) {
        let mut cursor = TextCursor::new(&text);
        cursor.set_cursor_position(start);
        let position = cursor.cursor_position();
        let count = cursor.len() - position + extra;

        let failed = cursor.mark_fill_range_forward(count).is_err();
        prop_assert!(failed);
        prop_assert!(cursor.marks().is_empty());
        prop_assert_eq!(cursor.cursor_position(), position);
    }

    #[test]
    fn alpha_sequence_hit_matches_needle(text in "[a-c -]{1,30}", needle in "[a-c]{1,3}") {
        let mut cursor = TextCursor::new(&text);
        cursor.move_cursor_forward_index_of_alpha_sequence(&needle);
        if !cursor.cursor_position_terminal() {
            let len = needle.chars().count();
            cursor.mark_fill_alpha_range_forward(len).unwrap();
            prop_assert_eq!(cursor.marked_text(), needle);
        }
    }
}
