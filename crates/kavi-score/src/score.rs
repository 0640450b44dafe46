//! The [`Score`] value produced by a match scorer.

use core::fmt;

use kavi_text::{Marks, TextCursor};

/// How a candidate matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Candidate equals the query.
    Exact,
    /// Candidate starts with the query.
    Prefix,
    /// Query found as a substring beginning at a word start.
    WordStart,
    /// Query letters are the initials of successive words.
    Acronym,
    /// Query found as a substring anywhere.
    Contains,
    /// Query letters are consecutive letters, ignoring separators.
    AlphaSequence,
    /// Query characters appear in order.
    Subsequence,
    /// Every whitespace-separated query term matched.
    Words,
    /// The query was empty; every candidate matches equally.
    EmptyQuery,
    /// Rank supplied by an external scorer without classification.
    Ranked,
    /// The field does not take part in the total.
    NotApplicable,
    /// No match.
    NoMatch,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Prefix => "prefix",
            Self::WordStart => "word-start",
            Self::Acronym => "acronym",
            Self::Contains => "contains",
            Self::AlphaSequence => "alpha-sequence",
            Self::Subsequence => "subsequence",
            Self::Words => "words",
            Self::EmptyQuery => "empty-query",
            Self::Ranked => "ranked",
            Self::NotApplicable => "not-applicable",
            Self::NoMatch => "no-match",
        };
        f.write_str(name)
    }
}

/// Match quality of one candidate string.
///
/// `rank == 0` means no match and is the only signal list filtering relies
/// on. A negative rank means "does not apply" and is skipped by per-column
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    rank: i32,
    kind: MatchKind,
    positions: Marks,
}

impl Score {
    #[must_use]
    pub fn new(rank: i32, kind: MatchKind, positions: Marks) -> Self {
        Self {
            rank,
            kind,
            positions,
        }
    }

    /// A bare rank with no position information.
    #[must_use]
    pub fn ranked(rank: i32) -> Self {
        let kind = match rank {
            0 => MatchKind::NoMatch,
            r if r < 0 => MatchKind::NotApplicable,
            _ => MatchKind::Ranked,
        };
        Self::new(rank, kind, Marks::new())
    }

    /// Rank 0: the candidate is filtered out.
    #[must_use]
    pub fn no_match() -> Self {
        Self::new(0, MatchKind::NoMatch, Marks::new())
    }

    /// Negative rank: ignored when summing columns.
    #[must_use]
    pub fn not_applicable() -> Self {
        Self::new(-1, MatchKind::NotApplicable, Marks::new())
    }

    /// Capture the marks of a cursor as match positions.
    #[must_use]
    pub fn from_cursor(rank: i32, kind: MatchKind, cursor: &TextCursor) -> Self {
        Self::new(rank, kind, Marks::from_slice(cursor.marks()))
    }

    #[must_use]
    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// Tier that produced this score.
    #[must_use]
    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    /// Matched character offsets into the candidate, ascending.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// The same rank and kind with positions cut to the `len` characters
    /// starting at `start`, re-based so `start` becomes offset 0.
    ///
    /// Maps a score over a joined row back onto one field of that row.
    #[must_use]
    pub fn within(&self, start: usize, len: usize) -> Self {
        let end = start.saturating_add(len);
        let positions = self
            .positions
            .iter()
            .filter(|&&p| p >= start && p < end)
            .map(|&p| p - start)
            .collect();
        Self::new(self.rank, self.kind, positions)
    }

    /// Whether the candidate matched (`rank > 0`).
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.rank > 0
    }

    /// Whether the score should be ignored by per-column totals.
    #[must_use]
    pub fn is_not_applicable(&self) -> bool {
        self.rank < 0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::no_match()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_classifies_sign() {
        assert_eq!(Score::ranked(0).kind(), MatchKind::NoMatch);
        assert_eq!(Score::ranked(-3).kind(), MatchKind::NotApplicable);
        assert_eq!(Score::ranked(7).kind(), MatchKind::Ranked);
        assert!(Score::ranked(7).is_match());
        assert!(Score::ranked(-1).is_not_applicable());
    }

    #[test]
    fn from_cursor_copies_marks() {
        let mut cursor = TextCursor::new("kavi");
        cursor.add_mark(2).unwrap().add_mark(0).unwrap();
        let score = Score::from_cursor(4, MatchKind::Contains, &cursor);
        assert_eq!(score.positions(), &[0, 2]);
        assert_eq!(score.rank(), 4);
    }

    #[test]
    fn within_rebases_positions_to_span() {
        let positions = Marks::from_slice(&[0, 3, 5, 6, 9]);
        let score = Score::new(7, MatchKind::Words, positions);
        let field = score.within(5, 4);
        assert_eq!(field.positions(), &[0, 1]);
        assert_eq!(field.rank(), 7);
        assert_eq!(field.kind(), MatchKind::Words);
        assert!(score.within(10, 3).positions().is_empty());
    }

    #[test]
    fn default_is_no_match() {
        let score = Score::default();
        assert!(!score.is_match());
        assert!(!score.is_not_applicable());
        assert_eq!(score, Score::no_match());
    }

    #[test]
    fn kind_display() {
        assert_eq!(MatchKind::WordStart.to_string(), "word-start");
        assert_eq!(MatchKind::AlphaSequence.to_string(), "alpha-sequence");
        assert_eq!(MatchKind::NoMatch.to_string(), "no-match");
    }
}
