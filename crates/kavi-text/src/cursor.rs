//! Marker-tracking cursor over a single candidate string.
//!
//! A [`TextCursor`] owns its text (as characters), a scan position, and an
//! ordered list of *marks*: character offsets that a scorer has matched.
//! A separate *current mark* index walks the mark list so callers can reason
//! about marked regions (maximal runs of marks at consecutive offsets).
//!
//! # Invariants
//!
//! 1. The scan position is always in `[0, len]`; `len` is terminal.
//! 2. Marks are sorted ascending after every mutation. Duplicate offsets are
//!    tolerated and kept as distinct slots.
//! 3. Every mark is a valid character offset (`< len`).
//! 4. The current mark index is in `[0, marks.len()]`; `marks.len()` is
//!    terminal.
//! 5. Read-only scans (`word_at_cursor`, `count_unmarked_words_between_marks`,
//!    `mark_fill_alpha_range_forward`) restore the scan position and current
//!    mark on every exit path.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Offset out of range | `add_mark`, `set_marks`, `mask_regions` | `CursorError::OffsetOutOfRange`, no mutation |
//! | Fill past end | `mark_fill_*_forward` | error, no marks inserted |
//! | Peek out of range | marked-char and char peeks | `None` |
//!
//! "Alphabetic" means [`char::is_alphabetic`]. Digits, whitespace and
//! punctuation are always word boundaries.

use core::fmt;
use core::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use crate::error::{CursorError, Result};

/// Ordered list of marked character offsets.
pub type Marks = SmallVec<[usize; 16]>;

/// Whether an optional character is alphabetic. `None` is never alphabetic.
#[inline]
#[must_use]
pub fn is_alpha(c: Option<char>) -> bool {
    c.is_some_and(char::is_alphabetic)
}

/// Scan cursor with ordered match marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCursor {
    text: Vec<char>,
    position: usize,
    marks: Marks,
    current_mark: usize,
}

/// Restores the scan position and current mark when dropped.
struct RestoreGuard<'a> {
    inner: &'a mut TextCursor,
    saved_position: usize,
    saved_mark: usize,
}

impl<'a> RestoreGuard<'a> {
    fn new(inner: &'a mut TextCursor) -> Self {
        let saved_position = inner.position;
        let saved_mark = inner.current_mark;
        Self {
            inner,
            saved_position,
            saved_mark,
        }
    }
}

impl Deref for RestoreGuard<'_> {
    type Target = TextCursor;

    fn deref(&self) -> &TextCursor {
        self.inner
    }
}

impl DerefMut for RestoreGuard<'_> {
    fn deref_mut(&mut self) -> &mut TextCursor {
        self.inner
    }
}

impl Drop for RestoreGuard<'_> {
    fn drop(&mut self) {
        self.inner.position = self.saved_position;
        self.inner.current_mark = self.saved_mark;
    }
}

impl TextCursor {
    /// Create a cursor at offset 0 with no marks.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            position: 0,
            marks: Marks::new(),
            current_mark: 0,
        }
    }

    /// The (possibly masked) text.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// The text as characters; offsets index this slice.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.text
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(offset).copied()
    }

    fn offset_error(&self, offset: usize) -> CursorError {
        CursorError::OffsetOutOfRange {
            offset,
            len: self.text.len(),
            text: self.text(),
        }
    }

    fn insert_mark(&mut self, offset: usize) {
        let slot = self.marks.partition_point(|&m| m < offset);
        self.marks.insert(slot, offset);
    }

    // ------------------------------------------------------------------
    // Marks
    // ------------------------------------------------------------------

    /// Insert `offset` keeping marks ascending.
    pub fn add_mark(&mut self, offset: usize) -> Result<&mut Self> {
        if offset >= self.text.len() {
            return Err(self.offset_error(offset));
        }
        self.insert_mark(offset);
        Ok(self)
    }

    /// Replace all marks. The current mark resets to the first one.
    pub fn set_marks<I>(&mut self, offsets: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut marks: Marks = offsets.into_iter().collect();
        if let Some(&bad) = marks.iter().find(|&&m| m >= self.text.len()) {
            return Err(self.offset_error(bad));
        }
        marks.sort_unstable();
        self.marks = marks;
        self.current_mark = 0;
        Ok(self)
    }

    /// Remove every mark. The scan position is untouched.
    pub fn clear_marks(&mut self) -> &mut Self {
        self.marks.clear();
        self.current_mark = 0;
        self
    }

    /// Mark the `count` characters starting at the scan position.
    pub fn mark_fill_range_forward(&mut self, count: usize) -> Result<&mut Self> {
        let end = self
            .position
            .checked_add(count)
            .filter(|&end| end <= self.text.len())
            .ok_or_else(|| CursorError::RangeOutOfBounds {
                cursor: self.position,
                count,
                len: self.text.len(),
                text: self.text(),
            })?;
        for offset in self.position..end {
            self.insert_mark(offset);
        }
        Ok(self)
    }

    /// Mark the scan position and the next `count - 1` alphabetic characters.
    ///
    /// The scan position is restored afterwards; only the marks change.
    pub fn mark_fill_alpha_range_forward(&mut self, count: usize) -> Result<&mut Self> {
        let offsets: Marks = {
            let mut scan = RestoreGuard::new(self);
            let mut offsets = Marks::new();
            for _ in 0..count {
                offsets.push(scan.position);
                scan.move_cursor_forward_next_alpha();
            }
            offsets
        };
        if let Some(&bad) = offsets.iter().find(|&&o| o >= self.text.len()) {
            return Err(self.offset_error(bad));
        }
        for offset in offsets {
            self.insert_mark(offset);
        }
        Ok(self)
    }

    /// Marked offsets in ascending order.
    #[must_use]
    pub fn marks(&self) -> &[usize] {
        &self.marks
    }

    /// The characters at each mark, in mark order.
    #[must_use]
    pub fn marked_text(&self) -> String {
        self.marks.iter().filter_map(|&m| self.char_at(m)).collect()
    }

    // ------------------------------------------------------------------
    // Mark navigation
    // ------------------------------------------------------------------

    /// Whether the current mark index is past the last mark.
    #[must_use]
    pub fn mark_position_terminal(&self) -> bool {
        self.current_mark >= self.marks.len()
    }

    /// Character at the current mark.
    #[must_use]
    pub fn current_marked_char(&self) -> Option<char> {
        self.marks
            .get(self.current_mark)
            .and_then(|&m| self.char_at(m))
    }

    /// Character at the mark after the current one.
    #[must_use]
    pub fn peek_next_marked_char(&self) -> Option<char> {
        self.marks
            .get(self.current_mark + 1)
            .and_then(|&m| self.char_at(m))
    }

    /// Character at the mark before the current one.
    #[must_use]
    pub fn peek_previous_marked_char(&self) -> Option<char> {
        self.current_mark
            .checked_sub(1)
            .and_then(|i| self.marks.get(i))
            .and_then(|&m| self.char_at(m))
    }

    /// Make the first mark current.
    pub fn set_first_mark_current(&mut self) -> &mut Self {
        self.current_mark = 0;
        self
    }

    /// Step the current mark forward one (clamped to terminal).
    pub fn set_next_mark_current(&mut self) -> &mut Self {
        self.current_mark = (self.current_mark + 1).min(self.marks.len());
        self
    }

    /// Step the current mark back one; stays at the first mark.
    pub fn set_previous_mark_current(&mut self) -> &mut Self {
        self.current_mark = self.current_mark.saturating_sub(1);
        self
    }

    /// Point the current mark at mark number `index` (clamped to terminal).
    pub fn set_current_mark(&mut self, index: usize) -> &mut Self {
        self.current_mark = index.min(self.marks.len());
        self
    }

    /// Index into the mark list of the current mark.
    #[must_use]
    pub fn current_mark(&self) -> usize {
        self.current_mark
    }

    /// Text offset of the current mark, if any.
    #[must_use]
    pub fn index_of_current_mark(&self) -> Option<usize> {
        self.marks.get(self.current_mark).copied()
    }

    /// Text offset of the mark after the current one.
    #[must_use]
    pub fn index_of_next_mark(&self) -> Option<usize> {
        self.marks.get(self.current_mark + 1).copied()
    }

    /// Text offset of the lowest mark.
    #[must_use]
    pub fn index_of_first_mark(&self) -> Option<usize> {
        self.marks.first().copied()
    }

    /// Text offset of the highest mark.
    #[must_use]
    pub fn index_of_last_mark(&self) -> Option<usize> {
        self.marks.last().copied()
    }

    /// Advance the current mark to the last mark of its marked region.
    pub fn set_current_mark_to_end_of_marked_region(&mut self) -> &mut Self {
        while let (Some(current), Some(next)) =
            (self.index_of_current_mark(), self.index_of_next_mark())
        {
            if next != current + 1 {
                break;
            }
            self.current_mark += 1;
        }
        self
    }

    /// Whether the current mark starts a marked region.
    #[must_use]
    pub fn current_mark_is_first_of_marked_region(&self) -> bool {
        if self.mark_position_terminal() {
            return false;
        }
        match self.current_mark {
            0 => true,
            i => self.marks[i - 1] + 1 != self.marks[i],
        }
    }

    // ------------------------------------------------------------------
    // Counting
    // ------------------------------------------------------------------

    /// Count whole unmarked words between marked region `first` and mark
    /// number `last`.
    ///
    /// Walks region to region; between two regions a word is only counted
    /// when it has a separator run on both sides, so `n` separator runs
    /// contribute `n - 1` words. Leading and trailing words of the text are
    /// never counted.
    pub fn count_unmarked_words_between_marks(&mut self, first: usize, last: usize) -> usize {
        if first >= self.marks.len() {
            return 0;
        }
        let mut walk = RestoreGuard::new(self);
        walk.set_current_mark(first)
            .set_current_mark_to_end_of_marked_region();

        let mut words = 0;
        while walk.current_mark < last {
            let (Some(from), Some(to)) = (walk.index_of_current_mark(), walk.index_of_next_mark())
            else {
                break;
            };
            let regions = walk.count_non_alphabetic_regions(from, to);
            if regions > 1 {
                words += regions - 1;
            }
            walk.set_next_mark_current()
                .set_current_mark_to_end_of_marked_region();
        }
        words
    }

    /// Number of maximal non-alphabetic runs starting in `[start, end)`.
    ///
    /// A run already in progress at `start` counts.
    #[must_use]
    pub fn count_non_alphabetic_regions(&self, start: usize, end: usize) -> usize {
        let end = end.min(self.text.len());
        (start..end)
            .filter(|&i| {
                !is_alpha(self.char_at(i)) && (i == start || is_alpha(self.char_at(i - 1)))
            })
            .count()
    }

    /// Alphabetic characters strictly between `start` and `end`.
    #[must_use]
    pub fn count_alphabetic_chars_between(&self, start: usize, end: usize) -> usize {
        let end = end.min(self.text.len());
        (start.saturating_add(1)..end)
            .filter(|&i| is_alpha(self.char_at(i)))
            .count()
    }

    // ------------------------------------------------------------------
    // Characters and words
    // ------------------------------------------------------------------

    /// Scan position as a char offset; `len` is terminal.
    #[must_use]
    pub fn cursor_position(&self) -> usize {
        self.position
    }

    /// Move the scan position (clamped to terminal).
    pub fn set_cursor_position(&mut self, position: usize) -> &mut Self {
        self.position = position.min(self.text.len());
        self
    }

    /// Whether the scan position is past the last char.
    #[must_use]
    pub fn cursor_position_terminal(&self) -> bool {
        self.position >= self.text.len()
    }

    /// Char under the cursor, `None` at terminal.
    #[must_use]
    pub fn current_char(&self) -> Option<char> {
        self.char_at(self.position)
    }

    /// Char before the cursor without moving.
    #[must_use]
    pub fn peek_previous_char(&self) -> Option<char> {
        self.position.checked_sub(1).and_then(|i| self.char_at(i))
    }

    /// Char after the cursor without moving.
    #[must_use]
    pub fn peek_next_char(&self) -> Option<char> {
        self.char_at(self.position + 1)
    }

    /// Advance one char, stopping at terminal.
    pub fn move_cursor_forward(&mut self) -> &mut Self {
        self.position = (self.position + 1).min(self.text.len());
        self
    }

    /// Step back one char, stopping at 0.
    pub fn move_cursor_backward(&mut self) -> &mut Self {
        self.position = self.position.saturating_sub(1);
        self
    }

    /// The alphabetic word under the cursor, or an empty string when the
    /// cursor is terminal or on a separator.
    pub fn word_at_cursor(&mut self) -> String {
        if !is_alpha(self.current_char()) {
            return String::new();
        }
        let mut scan = RestoreGuard::new(self);
        let start = scan.move_cursor_previous_alpha_boundary().position;
        let end = scan.move_cursor_next_alpha_boundary().position;
        scan.text[start..=end].iter().collect()
    }

    /// Whether the cursor is on the first letter of a word.
    #[must_use]
    pub fn cursor_at_word_start(&self) -> bool {
        is_alpha(self.current_char()) && !is_alpha(self.peek_previous_char())
    }

    /// Move back to the first letter of the current word.
    pub fn move_cursor_previous_alpha_boundary(&mut self) -> &mut Self {
        while is_alpha(self.peek_previous_char()) {
            self.position -= 1;
        }
        self
    }

    /// Move forward to the last letter of the current word.
    pub fn move_cursor_next_alpha_boundary(&mut self) -> &mut Self {
        while is_alpha(self.peek_next_char()) {
            self.position += 1;
        }
        self
    }

    /// Advance until `should_stop` holds or the cursor is terminal.
    pub fn move_cursor_forward_until<F>(&mut self, mut should_stop: F) -> &mut Self
    where
        F: FnMut(&Self) -> bool,
    {
        while !should_stop(self) && !self.cursor_position_terminal() {
            self.position += 1;
        }
        self
    }

    /// Move to the first letter of the next word.
    pub fn move_cursor_forward_next_word(&mut self) -> &mut Self {
        self.move_cursor_next_alpha_boundary()
            .move_cursor_forward()
            .move_cursor_forward_until(|c| is_alpha(c.current_char()))
    }

    /// Advance at least one position, then to the next alphabetic character.
    pub fn move_cursor_forward_next_alpha(&mut self) -> &mut Self {
        while !self.cursor_position_terminal() {
            self.position += 1;
            if self.cursor_position_terminal() || is_alpha(self.current_char()) {
                break;
            }
        }
        self
    }

    /// Move to the first `ch` at or after the cursor, or terminal.
    pub fn move_cursor_forward_index_of(&mut self, ch: char) -> &mut Self {
        self.position = self.text[self.position..]
            .iter()
            .position(|&c| c == ch)
            .map_or(self.text.len(), |i| self.position + i);
        self
    }

    /// Move to the first occurrence of `needle` at or after the cursor, or
    /// terminal.
    pub fn move_cursor_forward_index_of_sequence(&mut self, needle: &str) -> &mut Self {
        let needle: SmallVec<[char; 32]> = needle.chars().collect();
        if needle.is_empty() {
            return self;
        }
        self.position = self.text[self.position..]
            .windows(needle.len())
            .position(|window| window == needle.as_slice())
            .map_or(self.text.len(), |i| self.position + i);
        self
    }

    /// Move to the first occurrence of `needle` in the whole text, or
    /// terminal.
    pub fn move_cursor_index_of(&mut self, needle: &str) -> &mut Self {
        self.position = 0;
        self.move_cursor_forward_index_of_sequence(needle)
    }

    /// Find the alphabetic characters of `needle` as consecutive letters of
    /// the text, skipping separators between them.
    ///
    /// On success the cursor rests on the first matched letter; otherwise it
    /// is terminal. A needle without letters leaves the cursor unchanged.
    pub fn move_cursor_forward_index_of_alpha_sequence(&mut self, needle: &str) -> &mut Self {
        let needle: SmallVec<[char; 32]> = needle.chars().filter(|c| c.is_alphabetic()).collect();
        let Some(&first) = needle.first() else {
            return self;
        };

        let mut matched = 0;
        let mut start = self.position;
        while matched < needle.len() {
            if matched == 0 {
                self.move_cursor_forward_index_of(first);
                start = self.position;
                if self.cursor_position_terminal() {
                    break;
                }
            } else {
                self.move_cursor_forward_next_alpha();
                if self.cursor_position_terminal() {
                    break;
                }
                if self.current_char() != Some(needle[matched]) {
                    // restart one past the previous candidate start
                    self.position = start + 1;
                    matched = 0;
                    continue;
                }
            }
            matched += 1;
        }

        self.position = if matched == needle.len() {
            start
        } else {
            self.text.len()
        };
        self
    }

    /// As [`move_cursor_forward_index_of_alpha_sequence`], retrying from the
    /// start of the text when nothing is found after the cursor.
    ///
    /// [`move_cursor_forward_index_of_alpha_sequence`]: Self::move_cursor_forward_index_of_alpha_sequence
    pub fn move_cursor_forward_index_of_alpha_sequence_wrap_around(
        &mut self,
        needle: &str,
    ) -> &mut Self {
        let started_at = self.position;
        self.move_cursor_forward_index_of_alpha_sequence(needle);
        if started_at > 0 && self.cursor_position_terminal() {
            self.position = 0;
            self.move_cursor_forward_index_of_alpha_sequence(needle);
        }
        self
    }

    // ------------------------------------------------------------------
    // Masking
    // ------------------------------------------------------------------

    /// Replace the characters at `offsets` with spaces. Length and all other
    /// offsets are preserved.
    pub fn mask_regions(&mut self, offsets: &[usize]) -> Result<&mut Self> {
        if let Some(&bad) = offsets.iter().find(|&&o| o >= self.text.len()) {
            return Err(self.offset_error(bad));
        }
        for &offset in offsets {
            self.text[offset] = ' ';
        }
        Ok(self)
    }
}

impl fmt::Display for TextCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark_offset = self.index_of_current_mark().map_or(-1, |m| m as i64);
        write!(
            f,
            "{} @ cursor {} | mark {} at {} | marks {:?}",
            self.text(),
            self.position,
            self.current_mark,
            mark_offset,
            self.marks.as_slice()
        )
    }
}
