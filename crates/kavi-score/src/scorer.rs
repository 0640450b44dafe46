//! Scorer contract and the default tiered string scorer.
//!
//! # Tiers
//!
//! [`StringScorer`] classifies a single-term query against a candidate into
//! the best matching tier; the first tier that matches wins.
//!
//! | Tier | Rank | Example (query → candidate) |
//! |------|------|-----------------------------|
//! | Exact | 10 | `save` → `Save` |
//! | Prefix | 8 | `sav` → `Save All` |
//! | WordStart | 7 | `all` → `Save All` |
//! | Acronym | 6 (5 when words are skipped) | `va` → `View All` |
//! | Contains | 4 | `ave` → `Save All` |
//! | AlphaSequence | 3 | `veal` → `Save-All` |
//! | Subsequence | 2 when every run starts a word, else 1 | `sval` → `Sort Values` |
//!
//! Multi-term queries require every term to match one of the non-fuzzy
//! tiers. Each matched term is masked out of the candidate before the next
//! term is tried, so two terms never claim the same characters. The rank is
//! the weakest term's rank.

use std::borrow::Cow;

use kavi_text::{Marks, TextCursor};
use smallvec::SmallVec;

use crate::error::Result;
use crate::score::{MatchKind, Score};

/// Candidate equals the query.
pub const RANK_EXACT: i32 = 10;
/// Candidate starts with the query.
pub const RANK_PREFIX: i32 = 8;
/// Query found at the start of a later word.
pub const RANK_WORD_START: i32 = 7;
/// Query letters start consecutive words.
pub const RANK_ACRONYM: i32 = 6;
/// Query letters start words, with unmatched words in between.
pub const RANK_ACRONYM_SKIPPING: i32 = 5;
/// Query found anywhere as a substring.
pub const RANK_CONTAINS: i32 = 4;
/// Query letters found contiguously once non-letters are skipped.
pub const RANK_ALPHA_SEQUENCE: i32 = 3;
/// Fuzzy subsequence whose every run starts a word.
pub const RANK_SUBSEQUENCE_WORDS: i32 = 2;
/// Any other fuzzy subsequence.
pub const RANK_SUBSEQUENCE: i32 = 1;
/// Rank given to every candidate for an empty query, keeping input order.
pub const RANK_EMPTY_QUERY: i32 = 1;

/// Scores a query against one candidate string.
///
/// Implementations must return rank `0` for "no match" and a higher rank
/// for a better match. Errors are reserved for programming defects; they
/// propagate unchanged through list ranking.
pub trait MatchScorer: Send + Sync {
    /// Score `candidate` against `query`.
    fn score(&self, query: &str, candidate: &str) -> Result<Score>;

    /// Short identifier used in trace output.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> MatchScorer for F
where
    F: Fn(&str, &str) -> Score + Send + Sync,
{
    fn score(&self, query: &str, candidate: &str) -> Result<Score> {
        Ok(self(query, candidate))
    }
}

/// Tiered fuzzy scorer driven by a [`TextCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringScorer {
    case_sensitive: bool,
    fuzzy: bool,
}

impl Default for StringScorer {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            fuzzy: true,
        }
    }
}

type TierFn = fn(&str, &str) -> Result<Option<Score>>;

/// Tiers in descending rank order; subsequence is handled separately.
const STRICT_TIERS: [TierFn; 6] = [
    exact,
    prefix,
    word_start,
    acronym,
    contains,
    alpha_sequence,
];

impl StringScorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare characters exactly instead of case-folding both sides.
    #[must_use]
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Enable the in-order subsequence tier for single-term queries.
    #[must_use]
    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether the subsequence tiers are enabled.
    #[must_use]
    pub fn is_fuzzy(&self) -> bool {
        self.fuzzy
    }

    fn fold<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(s)
        } else {
            // one char out per char in, so offsets stay valid for the original
            Cow::Owned(
                s.chars()
                    .map(|c| c.to_lowercase().next().unwrap_or(c))
                    .collect(),
            )
        }
    }

    fn score_term(&self, term: &str, candidate: &str) -> Result<Score> {
        if let Some(score) = strict_tiers(term, candidate)? {
            return Ok(score);
        }
        if self.fuzzy
            && let Some(score) = subsequence(term, candidate)?
        {
            return Ok(score);
        }
        Ok(Score::no_match())
    }

    fn score_words(&self, terms: &[&str], candidate: &str) -> Result<Score> {
        let mut masked = candidate.to_owned();
        let mut positions = Marks::new();
        let mut rank = i32::MAX;

        for term in terms {
            let Some(term_score) = strict_tiers(term, &masked)? else {
                return Ok(Score::no_match());
            };
            rank = rank.min(term_score.rank());

            let mut mask = TextCursor::new(&masked);
            mask.mask_regions(term_score.positions())?;
            masked = mask.text();
            positions.extend_from_slice(term_score.positions());
        }

        positions.sort_unstable();
        Ok(Score::new(rank, MatchKind::Words, positions))
    }
}

impl MatchScorer for StringScorer {
    fn score(&self, query: &str, candidate: &str) -> Result<Score> {
        let query = self.fold(query);
        let candidate = self.fold(candidate);
        let terms: SmallVec<[&str; 4]> = query.split_whitespace().collect();

        let score = match terms.as_slice() {
            [] => Score::new(RANK_EMPTY_QUERY, MatchKind::EmptyQuery, Marks::new()),
            [term] => self.score_term(term, &candidate)?,
            _ => self.score_words(&terms, &candidate)?,
        };

        tracing::trace!(
            kind = %score.kind(),
            rank = score.rank(),
            terms = terms.len(),
            "scored candidate"
        );
        Ok(score)
    }

    fn name(&self) -> &str {
        "string"
    }
}

fn strict_tiers(term: &str, candidate: &str) -> Result<Option<Score>> {
    for tier in STRICT_TIERS {
        if let Some(score) = tier(term, candidate)? {
            return Ok(Some(score));
        }
    }
    Ok(None)
}

fn exact(term: &str, candidate: &str) -> Result<Option<Score>> {
    if term != candidate {
        return Ok(None);
    }
    let mut cursor = TextCursor::new(candidate);
    cursor.mark_fill_range_forward(cursor.len())?;
    Ok(Some(Score::from_cursor(RANK_EXACT, MatchKind::Exact, &cursor)))
}

fn prefix(term: &str, candidate: &str) -> Result<Option<Score>> {
    if !candidate.starts_with(term) {
        return Ok(None);
    }
    let mut cursor = TextCursor::new(candidate);
    cursor.mark_fill_range_forward(term.chars().count())?;
    Ok(Some(Score::from_cursor(RANK_PREFIX, MatchKind::Prefix, &cursor)))
}

fn word_start(term: &str, candidate: &str) -> Result<Option<Score>> {
    find_substring(term, candidate, true, RANK_WORD_START, MatchKind::WordStart)
}

fn contains(term: &str, candidate: &str) -> Result<Option<Score>> {
    find_substring(term, candidate, false, RANK_CONTAINS, MatchKind::Contains)
}

fn find_substring(
    term: &str,
    candidate: &str,
    at_word_start: bool,
    rank: i32,
    kind: MatchKind,
) -> Result<Option<Score>> {
    let mut cursor = TextCursor::new(candidate);
    loop {
        cursor.move_cursor_forward_index_of_sequence(term);
        if cursor.cursor_position_terminal() {
            return Ok(None);
        }
        if !at_word_start || cursor.cursor_at_word_start() {
            cursor.mark_fill_range_forward(term.chars().count())?;
            return Ok(Some(Score::from_cursor(rank, kind, &cursor)));
        }
        cursor.move_cursor_forward();
    }
}

fn acronym(term: &str, candidate: &str) -> Result<Option<Score>> {
    if term.chars().count() < 2 || !term.chars().all(char::is_alphabetic) {
        return Ok(None);
    }
    // the leftmost alignment may skip words that a later one does not
    let Some(first) = acronym_from(term, candidate, 0)? else {
        return Ok(None);
    };
    let mut retry = first.clone();
    while retry.rank() < RANK_ACRONYM {
        let Some(&start) = retry.positions().first() else {
            break;
        };
        match acronym_from(term, candidate, start + 1)? {
            Some(tight) if tight.rank() == RANK_ACRONYM => return Ok(Some(tight)),
            Some(next) => retry = next,
            None => break,
        }
    }
    Ok(Some(first))
}

/// Greedy acronym alignment whose first letter is at or after `start`.
fn acronym_from(term: &str, candidate: &str, start: usize) -> Result<Option<Score>> {
    let mut cursor = TextCursor::new(candidate);
    cursor.set_cursor_position(start);
    for letter in term.chars() {
        cursor.move_cursor_forward_until(|c| {
            c.current_char() == Some(letter) && c.cursor_at_word_start()
        });
        if cursor.cursor_position_terminal() {
            return Ok(None);
        }
        let at = cursor.cursor_position();
        cursor.add_mark(at)?.move_cursor_forward_next_word();
    }
    let last = cursor.marks().len() - 1;
    let rank = match cursor.count_unmarked_words_between_marks(0, last) {
        0 => RANK_ACRONYM,
        _ => RANK_ACRONYM_SKIPPING,
    };
    Ok(Some(Score::from_cursor(rank, MatchKind::Acronym, &cursor)))
}

fn alpha_sequence(term: &str, candidate: &str) -> Result<Option<Score>> {
    let letters = term.chars().filter(|c| c.is_alphabetic()).count();
    if letters == 0 {
        return Ok(None);
    }

    let mut cursor = TextCursor::new(candidate);
    cursor.move_cursor_forward_index_of_alpha_sequence(term);
    if cursor.cursor_position_terminal() {
        return Ok(None);
    }
    cursor.mark_fill_alpha_range_forward(letters)?;
    Ok(Some(Score::from_cursor(
        RANK_ALPHA_SEQUENCE,
        MatchKind::AlphaSequence,
        &cursor,
    )))
}

fn subsequence(term: &str, candidate: &str) -> Result<Option<Score>> {
    let mut cursor = TextCursor::new(candidate);
    for ch in term.chars() {
        cursor.move_cursor_forward_index_of(ch);
        if cursor.cursor_position_terminal() {
            return Ok(None);
        }
        let at = cursor.cursor_position();
        cursor.add_mark(at)?.move_cursor_forward();
    }

    let mut runs_start_words = true;
    cursor.set_first_mark_current();
    while !cursor.mark_position_terminal() {
        if cursor.current_mark_is_first_of_marked_region()
            && let Some(offset) = cursor.index_of_current_mark()
            && !cursor.set_cursor_position(offset).cursor_at_word_start()
        {
            runs_start_words = false;
            break;
        }
        cursor.set_next_mark_current();
    }

    let rank = if runs_start_words {
        RANK_SUBSEQUENCE_WORDS
    } else {
        RANK_SUBSEQUENCE
    };
    Ok(Some(Score::from_cursor(
        rank,
        MatchKind::Subsequence,
        &cursor,
    )))
}
