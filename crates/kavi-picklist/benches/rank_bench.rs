//! Benchmarks for ranking a pick list on each keystroke.
//!
//! Run with: `cargo bench --package kavi-picklist --bench rank_bench`
//!
//! # Performance Baselines
//!
//! - Single-term queries across every scorer tier
//! - Multi-term queries (masking between terms)
//! - Whole-row vs per-column aggregation over two fields

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kavi_picklist::{CommandEntry, FieldResolver, ListRankAndFilter, RankConfig, ScoreMode};
use kavi_score::{MatchScorer, StringScorer};
use std::hint::black_box;

// ============================================================================
// Test Data Generation
// ============================================================================

const VERBS: &[&str] = &[
    "Open", "Close", "Save", "Revert", "Rename", "Format", "Toggle", "Show", "Find", "Run",
];
const NOUNS: &[&str] = &[
    "File", "Type", "Hierarchy", "Outline", "Editor", "Breakpoint", "Console", "Terminal",
    "Project", "Test",
];

/// `count` commands named from verb/noun pairs, cycling.
fn generate_commands(count: usize) -> Vec<CommandEntry> {
    (0..count)
        .map(|i| {
            let verb = VERBS[i % VERBS.len()];
            let noun = NOUNS[(i / VERBS.len()) % NOUNS.len()];
            CommandEntry::new(format!("cmd.{i}"), format!("{verb} {noun}"))
                .with_description(format!("{verb} the current {noun}"))
        })
        .collect()
}

// ============================================================================
// Scorer Benchmarks
// ============================================================================

fn bench_scorer_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scorer_tiers");
    let scorer = StringScorer::default();
    let candidate = "Open Type Hierarchy";

    for (tier, query) in [
        ("exact", "open type hierarchy"),
        ("prefix", "open"),
        ("word_start", "hier"),
        ("acronym", "oth"),
        ("contains", "erar"),
        ("subsequence", "otyh"),
        ("no_match", "xyz"),
    ] {
        group.bench_function(tier, |b| {
            b.iter(|| scorer.score(black_box(query), black_box(candidate)));
        });
    }

    group.finish();
}

// ============================================================================
// List Benchmarks
// ============================================================================

fn bench_rank_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_list");

    for size in [100, 1_000, 10_000] {
        let commands = generate_commands(size);
        let ranker = ListRankAndFilter::new(CommandEntry::name_field());
        group.throughput(Throughput::Elements(size as u64));

        for query in ["o", "ot", "open type", "zzz"] {
            group.bench_with_input(BenchmarkId::new(query, size), &commands, |b, commands| {
                b.iter(|| ranker.rank_and_filter(black_box(query), commands));
            });
        }
    }

    group.finish();
}

fn bench_score_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_modes");
    let commands = generate_commands(1_000);

    for mode in [ScoreMode::WholeRow, ScoreMode::PerColumn] {
        let mut ranker = ListRankAndFilter::new(CommandEntry::name_field())
            .with_config(RankConfig::new().score_mode(mode));
        ranker.add_field(FieldResolver::new("description", |c: &CommandEntry| {
            c.description.clone().unwrap_or_default()
        }));

        group.bench_function(mode.to_string(), |b| {
            b.iter(|| ranker.rank_and_filter(black_box("save"), &commands));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scorer_tiers, bench_rank_list, bench_score_modes);
criterion_main!(benches);
