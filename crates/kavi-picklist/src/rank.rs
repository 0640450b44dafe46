//! Score, filter and order a list of items for one query.
//!
//! # Pass
//!
//! 1. Each item is wrapped by a fresh [`RankedItemFactory`], so `order` is
//!    its position in the input slice.
//! 2. Whole-row mode joins every field value with the configured separator
//!    and scores the row once, handing each field the positions inside its
//!    own span; per-column mode scores every field.
//! 3. Items whose total is `0` are dropped.
//! 4. Survivors are ordered by total descending, then `order` ascending.
//! 5. `max_results` truncates.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Scorer error | defect inside the scorer | pass aborts, error returned unchanged |
//! | Empty item list | nothing to rank | empty result |

use core::cmp::Reverse;

use kavi_score::{MatchScorer, StringScorer};

use crate::config::RankConfig;
use crate::error::Result;
use crate::field::FieldResolver;
use crate::ranked::{RankedItem, RankedItemFactory, ScoreMode};

/// Ranks and filters items against a query over a set of named fields.
pub struct ListRankAndFilter<T> {
    fields: Vec<FieldResolver<T>>,
    scorer: Box<dyn MatchScorer>,
    config: RankConfig,
}

impl<T> ListRankAndFilter<T> {
    /// Create a ranker whose first field is `primary`, scored with the
    /// default [`StringScorer`].
    pub fn new(primary: FieldResolver<T>) -> Self {
        Self {
            fields: vec![primary],
            scorer: Box::new(StringScorer::default()),
            config: RankConfig::default(),
        }
    }

    /// Replace the scorer used for every field.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl MatchScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Replace the mode, limit and row separator.
    #[must_use]
    pub fn with_config(mut self, config: RankConfig) -> Self {
        self.config = config;
        self
    }

    /// Register another field. Re-adding an id replaces its resolver.
    pub fn add_field(&mut self, resolver: FieldResolver<T>) -> &mut Self {
        match self
            .fields
            .iter_mut()
            .find(|f| f.field_id() == resolver.field_id())
        {
            Some(slot) => *slot = resolver,
            None => self.fields.push(resolver),
        }
        self
    }

    /// Registered fields, primary first.
    #[must_use]
    pub fn fields(&self) -> &[FieldResolver<T>] {
        &self.fields
    }

    #[must_use]
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    #[must_use]
    pub fn scorer(&self) -> &dyn MatchScorer {
        self.scorer.as_ref()
    }

    /// Rank `items` against `query`; see the module docs for the pass.
    pub fn rank_and_filter<'a>(
        &self,
        query: &str,
        items: &'a [T],
    ) -> Result<Vec<RankedItem<&'a T>>> {
        self.rank_and_filter_with(query, items, |_| true)
    }

    /// As [`rank_and_filter`](Self::rank_and_filter), keeping only ranked
    /// items accepted by `keep`.
    ///
    /// The filter runs before `max_results` truncation and never reorders.
    pub fn rank_and_filter_with<'a, P>(
        &self,
        query: &str,
        items: &'a [T],
        mut keep: P,
    ) -> Result<Vec<RankedItem<&'a T>>>
    where
        P: FnMut(&T) -> bool,
    {
        let _span = tracing::debug_span!(
            "rank_and_filter",
            query_len = query.chars().count(),
            items = items.len(),
            fields = self.fields.len(),
            mode = %self.config.score_mode,
            scorer = self.scorer.name(),
        )
        .entered();

        let mut factory = RankedItemFactory::new();
        let mut ranked = Vec::with_capacity(items.len());
        let mut discarded = 0usize;

        for item in items {
            let mut entry = factory.make(item);
            self.score_item(query, &mut entry)?;

            if entry.total_score() == 0 {
                tracing::trace!(order = entry.order(), "discarded unmatched item");
                discarded += 1;
                continue;
            }
            if !keep(item) {
                tracing::trace!(order = entry.order(), "discarded by filter");
                discarded += 1;
                continue;
            }
            ranked.push(entry);
        }

        ranked.sort_by_cached_key(|entry| (Reverse(entry.total_score()), entry.order()));
        if let Some(limit) = self.config.max_results {
            ranked.truncate(limit);
        }

        tracing::debug!(kept = ranked.len(), discarded, "ranked list");
        Ok(ranked)
    }

    fn score_item(&self, query: &str, entry: &mut RankedItem<&T>) -> Result<()> {
        entry.set_score_mode(self.config.score_mode);
        match self.config.score_mode {
            ScoreMode::PerColumn => {
                for field in &self.fields {
                    let text = field.resolve(entry.item());
                    let score = self.scorer.score(query, &text)?;
                    entry.add_score(score, field.field_id());
                }
            }
            ScoreMode::WholeRow => {
                let separator_len = self.config.row_separator.chars().count();
                let mut row = String::new();
                let mut spans = Vec::with_capacity(self.fields.len());
                let mut offset = 0;
                for (i, field) in self.fields.iter().enumerate() {
                    if i > 0 {
                        row.push_str(&self.config.row_separator);
                        offset += separator_len;
                    }
                    let text = field.resolve(entry.item());
                    let len = text.chars().count();
                    row.push_str(&text);
                    spans.push((offset, len));
                    offset += len;
                }

                // one rank for the row; positions re-based onto each field
                let score = self.scorer.score(query, &row)?;
                for (field, (start, len)) in self.fields.iter().zip(spans) {
                    entry.add_score(score.within(start, len), field.field_id());
                }
            }
        }
        Ok(())
    }
}

impl<T> core::fmt::Debug for ListRankAndFilter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListRankAndFilter")
            .field("fields", &self.fields)
            .field("scorer", &self.scorer.name())
            .field("config", &self.config)
            .finish()
    }
}
