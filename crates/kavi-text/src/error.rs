//! Errors raised by invalid cursor usage.
//!
//! Every variant describes a caller bug (an offset or range outside the
//! text). A failed call never leaves a partial mutation behind.

use std::fmt;

/// Errors from [`TextCursor`](crate::TextCursor) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// A mark or mask offset does not index a character of the text.
    OffsetOutOfRange {
        offset: usize,
        len: usize,
        text: String,
    },
    /// A forward fill would run past the end of the text.
    RangeOutOfBounds {
        cursor: usize,
        count: usize,
        len: usize,
        text: String,
    },
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OffsetOutOfRange { offset, len, text } => {
                write!(f, "offset {offset} is outside text of length {len}: '{text}'")
            }
            Self::RangeOutOfBounds {
                cursor,
                count,
                len,
                text,
            } => write!(
                f,
                "range of {count} from cursor {cursor} exceeds text of length {len}: '{text}'"
            ),
        }
    }
}

impl std::error::Error for CursorError {}

pub type Result<T> = std::result::Result<T, CursorError>;
