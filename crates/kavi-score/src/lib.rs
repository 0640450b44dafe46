#![forbid(unsafe_code)]

//! Match scoring for Kavi quick-pick lists.
//!
//! A [`MatchScorer`] turns a `(query, candidate)` pair into a [`Score`]:
//! an integer rank (`0` = no match, `< 0` = "does not apply") plus the
//! matched character offsets for highlighting. Any
//! `Fn(&str, &str) -> Score` closure is a scorer; [`StringScorer`] is the
//! default tiered implementation built on [`kavi_text::TextCursor`].
//!
//! # Example
//!
//! ```
//! use kavi_score::{MatchKind, MatchScorer, StringScorer};
//!
//! let scorer = StringScorer::default();
//! let score = scorer.score("ot", "Open Type").unwrap();
//! assert_eq!(score.kind(), MatchKind::Acronym);
//! assert_eq!(score.positions(), &[0, 5]);
//!
//! assert!(!scorer.score("xyz", "Open Type").unwrap().is_match());
//! ```

pub mod error;
pub mod score;
pub mod scorer;

pub use error::{Result, ScoreError};
pub use score::{MatchKind, Score};
pub use scorer::{
    MatchScorer, RANK_ACRONYM, RANK_ACRONYM_SKIPPING, RANK_ALPHA_SEQUENCE, RANK_CONTAINS,
    RANK_EMPTY_QUERY, RANK_EXACT, RANK_PREFIX, RANK_SUBSEQUENCE, RANK_SUBSEQUENCE_WORDS,
    RANK_WORD_START, StringScorer,
};
