#![no_main]

use kavi_score::{MatchScorer, StringScorer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str, bool)| {
    let (query, candidate, case_sensitive) = input;
    let scorer = StringScorer::default().case_sensitive(case_sensitive);
    let Ok(score) = scorer.score(query, candidate) else {
        panic!("scorer failed on {query:?} / {candidate:?}");
    };

    let len = candidate.chars().count();
    assert!(score.positions().iter().all(|&p| p < len));
    assert!(score.positions().windows(2).all(|w| w[0] < w[1]));
    assert!(score.rank() >= 0);
});
