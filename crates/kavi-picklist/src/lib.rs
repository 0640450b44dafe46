#![forbid(unsafe_code)]

//! Ranking and filtering of quick-pick lists.
//!
//! A [`ListRankAndFilter`] resolves named fields from each item through
//! [`FieldResolver`]s, scores them with a [`MatchScorer`], drops items whose
//! total is zero and orders the rest by relevance, breaking ties by input
//! position.
//!
//! # Example
//!
//! ```
//! use kavi_picklist::{CommandEntry, ListRankAndFilter};
//!
//! let commands = vec![
//!     CommandEntry::new("file.close", "Close All"),
//!     CommandEntry::new("file.save", "Save").with_description("Write the active editor"),
//!     CommandEntry::new("file.save-all", "Save All"),
//! ];
//!
//! let ranker = ListRankAndFilter::new(CommandEntry::name_field());
//! let ranked = ranker.rank_and_filter("save", &commands).unwrap();
//!
//! let labels: Vec<String> = ranked.iter().map(|r| r.item().label()).collect();
//! assert_eq!(labels, ["Save - Write the active editor", "Save All"]);
//! ```
//!
//! # Feature Flags
//!
//! - `config-file`: load [`RankConfig`] from TOML.

pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod field;
pub mod rank;
pub mod ranked;

pub use command::{CommandEntry, LABEL_SEPARATOR};
pub use config::RankConfig;
pub use context::{ContextCommand, ContextCommands, InputState};
pub use error::{PickListError, Result};
pub use field::FieldResolver;
pub use rank::ListRankAndFilter;
pub use ranked::{RankedItem, RankedItemFactory, ScoreMode};

pub use kavi_score::{MatchKind, MatchScorer, Score, StringScorer};
