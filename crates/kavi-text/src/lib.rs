#![forbid(unsafe_code)]

//! Text scanning primitives for Kavi quick-pick matching.
//!
//! The central type is [`TextCursor`]: a character cursor over a single
//! candidate string plus an ordered list of *marks* (matched character
//! offsets). Match scorers drive the cursor to find word starts, contiguous
//! runs of matched characters, and the number of unmatched words between
//! them.
//!
//! # Example
//!
//! ```
//! use kavi_text::TextCursor;
//!
//! let mut cursor = TextCursor::new("open type hierarchy");
//! cursor.move_cursor_forward_next_word();
//! assert_eq!(cursor.word_at_cursor(), "type");
//!
//! cursor.mark_fill_range_forward(4).unwrap();
//! assert_eq!(cursor.marked_text(), "type");
//! ```

pub mod cursor;
pub mod error;

pub use cursor::{Marks, TextCursor, is_alpha};
pub use error::{CursorError, Result};
