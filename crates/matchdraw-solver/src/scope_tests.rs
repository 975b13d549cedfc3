//! Tests for run-level state.

use super::*;
use matchdraw_test::{forced_pair, open};
use rand::Rng;

#[test]
fn test_reseed_restarts_random_sequence() {
    let mut seeded = RunContext::with_seed(4, 10);
    let mut reseeded = RunContext::new(4);
    reseeded.reseed(10);

    let first: Vec<u64> = (0..5).map(|_| seeded.rng().random()).collect();
    let second: Vec<u64> = (0..5).map(|_| reseeded.rng().random()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_start_run_clears_counters_and_keeps_cache() {
    let problem = open(3);
    let simulator = DrawSimulator::new(&problem);
    let mut context = RunContext::with_seed(3, 1);

    context.start_run();
    for _ in 0..10 {
        context.run_trial(&simulator).unwrap();
    }
    assert_eq!(context.frequencies().trials(), 10);
    assert_eq!(context.stats().trials, 10);
    let entries = context.oracle().cache().len();
    assert!(entries > 0);

    context.start_run();
    assert_eq!(context.frequencies().trials(), 0);
    assert_eq!(context.stats().trials, 0);
    assert_eq!(context.oracle().stats().misses, 0);
    assert_eq!(context.oracle().cache().len(), entries);
}

#[test]
fn test_load_cache_counts_loaded_entries() {
    let problem = forced_pair();
    let simulator = DrawSimulator::new(&problem);

    let mut first = RunContext::with_seed(2, 5);
    first.start_run();
    first.run_trial(&simulator).unwrap();
    let cache = first.into_cache();
    let entries = cache.len();

    let mut second = RunContext::with_seed(2, 5);
    second.load_cache(cache);
    assert_eq!(second.loaded_entries(), entries);
    assert_eq!(second.summary().loaded_entries, entries);
}
