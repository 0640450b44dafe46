#![no_main]

use arbitrary::Arbitrary;
use kavi_text::TextCursor;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    AddMark(u8),
    FillForward(u8),
    FillAlphaForward(u8),
    SetCursor(u8),
    NextWord,
    NextAlpha,
    IndexOf(char),
    AlphaSequence(String),
    AlphaSequenceWrap(String),
    NextMark,
    FirstMark,
    EndOfRegion,
    CountWords(u8, u8),
    WordAtCursor,
    Mask,
}

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut cursor = TextCursor::new(&input.text);
    let len = cursor.len();

    for op in input.ops {
        match op {
            Op::AddMark(at) => {
                let _ = cursor.add_mark(usize::from(at));
            }
            Op::FillForward(n) => {
                let _ = cursor.mark_fill_range_forward(usize::from(n));
            }
            Op::FillAlphaForward(n) => {
                let _ = cursor.mark_fill_alpha_range_forward(usize::from(n));
            }
            Op::SetCursor(at) => {
                cursor.set_cursor_position(usize::from(at));
            }
            Op::NextWord => {
                cursor.move_cursor_forward_next_word();
            }
            Op::NextAlpha => {
                cursor.move_cursor_forward_next_alpha();
            }
            Op::IndexOf(ch) => {
                cursor.move_cursor_forward_index_of(ch);
            }
            Op::AlphaSequence(needle) => {
                cursor.move_cursor_forward_index_of_alpha_sequence(&needle);
            }
            Op::AlphaSequenceWrap(needle) => {
                cursor.move_cursor_forward_index_of_alpha_sequence_wrap_around(&needle);
            }
            Op::NextMark => {
                cursor.set_next_mark_current();
            }
            Op::FirstMark => {
                cursor.set_first_mark_current();
            }
            Op::EndOfRegion => {
                cursor.set_current_mark_to_end_of_marked_region();
            }
            Op::CountWords(first, last) => {
                let before = (cursor.cursor_position(), cursor.current_mark());
                cursor.count_unmarked_words_between_marks(usize::from(first), usize::from(last));
                assert_eq!(before, (cursor.cursor_position(), cursor.current_mark()));
            }
            Op::WordAtCursor => {
                let before = cursor.cursor_position();
                let _ = cursor.word_at_cursor();
                assert_eq!(before, cursor.cursor_position());
            }
            Op::Mask => {
                let marks = cursor.marks().to_vec();
                let _ = cursor.mask_regions(&marks);
            }
        }

        assert!(cursor.cursor_position() <= len);
        assert!(cursor.current_mark() <= cursor.marks().len());
        assert!(cursor.marks().windows(2).all(|w| w[0] <= w[1]));
        assert!(cursor.marks().iter().all(|&m| m < len));
        assert_eq!(cursor.len(), len);
    }
});
