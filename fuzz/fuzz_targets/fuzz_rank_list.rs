#![no_main]

use std::cmp::Reverse;

use kavi_picklist::{FieldResolver, ListRankAndFilter, RankConfig, ScoreMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, Vec<(String, String)>, bool)| {
    let (query, rows, per_column) = input;
    let mode = if per_column {
        ScoreMode::PerColumn
    } else {
        ScoreMode::WholeRow
    };

    let mut ranker =
        ListRankAndFilter::new(FieldResolver::new("left", |r: &(String, String)| r.0.clone()))
            .with_config(RankConfig::new().score_mode(mode));
    ranker.add_field(FieldResolver::new("right", |r: &(String, String)| r.1.clone()));

    let Ok(ranked) = ranker.rank_and_filter(&query, &rows) else {
        panic!("ranking failed for {query:?}");
    };
    assert!(ranked.len() <= rows.len());
    for pair in ranked.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let key = |r: &kavi_picklist::RankedItem<&(String, String)>| {
            (r.total_score(), Reverse(r.order()))
        };
        assert!(key(a) > key(b));
    }
});
