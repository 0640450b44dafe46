//! Ranked items and score aggregation.
//!
//! # Invariants
//!
//! 1. A [`RankedItem`] holds at most one score per field id; adding a score
//!    for an existing id overwrites it in place.
//! 2. `order` is assigned once by a [`RankedItemFactory`] and never changes.
//! 3. The total is recomputed on every call; nothing is cached.
//! 4. Equality and hashing look only at the wrapped item.

use core::fmt;
use core::hash::{Hash, Hasher};

use kavi_score::Score;
use smallvec::SmallVec;

/// How per-field scores combine into a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config-file", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config-file", serde(rename_all = "kebab-case"))]
pub enum ScoreMode {
    /// Every field must match; ranks are summed and negative ranks skipped.
    PerColumn,
    /// The whole row was scored once; the first score is the total.
    #[default]
    WholeRow,
}

impl fmt::Display for ScoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerColumn => f.write_str("per-column"),
            Self::WholeRow => f.write_str("whole-row"),
        }
    }
}

type ScoreSlots = SmallVec<[(String, Score); 2]>;

/// One domain item with its per-field scores for the current query.
#[derive(Debug, Clone)]
pub struct RankedItem<T> {
    item: T,
    scores: ScoreSlots,
    order: u64,
    mode: ScoreMode,
}

impl<T> RankedItem<T> {
    /// Record `score` for `field_id`, replacing any earlier score.
    pub fn add_score(&mut self, score: Score, field_id: impl Into<String>) -> &mut Self {
        let field_id = field_id.into();
        match self.scores.iter_mut().find(|(id, _)| *id == field_id) {
            Some((_, slot)) => *slot = score,
            None => self.scores.push((field_id, score)),
        }
        self
    }

    /// Score recorded for `field_id`, if that field was scored.
    #[must_use]
    pub fn column_score(&self, field_id: &str) -> Option<&Score> {
        self.scores
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, score)| score)
    }

    /// `(field_id, score)` pairs in the order they were first added.
    pub fn scores(&self) -> impl Iterator<Item = (&str, &Score)> {
        self.scores.iter().map(|(id, score)| (id.as_str(), score))
    }

    /// Choose how `total_score` aggregates the recorded scores.
    pub fn set_score_mode(&mut self, mode: ScoreMode) -> &mut Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn score_mode(&self) -> ScoreMode {
        self.mode
    }

    /// Aggregate relevance; `0` means the item is filtered out.
    ///
    /// | Mode | Total |
    /// |------|-------|
    /// | `PerColumn` | `0` if any rank is `0`, else the sum of non-negative ranks |
    /// | `WholeRow` | rank of the first score added, `0` with no scores |
    #[must_use]
    pub fn total_score(&self) -> i32 {
        match self.mode {
            ScoreMode::PerColumn => {
                let mut total = 0i32;
                for (_, score) in &self.scores {
                    match score.rank() {
                        0 => return 0,
                        r if r < 0 => {}
                        r => total = total.saturating_add(r),
                    }
                }
                total
            }
            ScoreMode::WholeRow => self.scores.first().map_or(0, |(_, s)| s.rank()),
        }
    }

    /// The ranked item.
    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    #[must_use]
    pub fn into_item(self) -> T {
        self.item
    }

    /// Creation sequence number; the tie-break for equal totals.
    #[must_use]
    pub fn order(&self) -> u64 {
        self.order
    }
}

impl<T: PartialEq> PartialEq for RankedItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

impl<T: Eq> Eq for RankedItem<T> {}

impl<T: Hash> Hash for RankedItem<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item.hash(state);
    }
}

/// Hands out ranked items with strictly increasing `order`.
#[derive(Debug, Clone, Default)]
pub struct RankedItemFactory {
    next: u64,
}

impl RankedItemFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose first item gets order `next`.
    #[must_use]
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Wrap `item` with the next order and no scores.
    pub fn make<T>(&mut self, item: T) -> RankedItem<T> {
        let order = self.next;
        self.next += 1;
        RankedItem {
            item,
            scores: ScoreSlots::new(),
            order,
            mode: ScoreMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ranked(ranks: &[i32], mode: ScoreMode) -> RankedItem<&'static str> {
        let mut item = RankedItemFactory::new().make("row");
        item.set_score_mode(mode);
        for (i, &rank) in ranks.iter().enumerate() {
            item.add_score(Score::ranked(rank), format!("f{i}"));
        }
        item
    }

    // ── Aggregation ────────────────────────────────────────────────────

    #[test]
    fn per_column_zero_vetoes() {
        assert_eq!(ranked(&[5, 0], ScoreMode::PerColumn).total_score(), 0);
    }

    #[test]
    fn per_column_skips_not_applicable() {
        assert_eq!(ranked(&[5, -1], ScoreMode::PerColumn).total_score(), 5);
        assert_eq!(ranked(&[3, 4], ScoreMode::PerColumn).total_score(), 7);
    }

    #[test]
    fn per_column_all_not_applicable_is_zero() {
        assert_eq!(ranked(&[-1, -2], ScoreMode::PerColumn).total_score(), 0);
    }

    #[test]
    fn whole_row_uses_first_score() {
        assert_eq!(ranked(&[6, 0], ScoreMode::WholeRow).total_score(), 6);
        assert_eq!(ranked(&[], ScoreMode::WholeRow).total_score(), 0);
    }

    #[test]
    fn default_mode_is_whole_row() {
        let item = RankedItemFactory::new().make(1);
        assert_eq!(item.score_mode(), ScoreMode::WholeRow);
        assert_eq!(ScoreMode::PerColumn.to_string(), "per-column");
    }

    // ── Scores ─────────────────────────────────────────────────────────

    #[test]
    fn add_score_overwrites_in_place() {
        let mut item = ranked(&[2, 3], ScoreMode::PerColumn);
        item.add_score(Score::ranked(9), "f0");
        assert_eq!(item.column_score("f0").map(Score::rank), Some(9));
        assert_eq!(item.scores().count(), 2);
        assert_eq!(item.scores().next().map(|(id, _)| id), Some("f0"));
        assert_eq!(item.total_score(), 12);
        assert!(item.column_score("missing").is_none());
    }

    // ── Identity ───────────────────────────────────────────────────────

    #[test]
    fn factory_orders_strictly_increase() {
        let mut factory = RankedItemFactory::starting_at(40);
        let a = factory.make('a');
        let b = factory.make('b');
        assert_eq!(a.order(), 40);
        assert_eq!(b.order(), 41);
        assert_eq!(b.into_item(), 'b');
    }

    #[test]
    fn equality_ignores_scores_and_order() {
        let mut factory = RankedItemFactory::new();
        let mut a = factory.make("same");
        let b = factory.make("same");
        a.add_score(Score::ranked(4), "name");
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b, factory.make("other")].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
