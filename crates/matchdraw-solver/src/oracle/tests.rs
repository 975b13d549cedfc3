//! Tests for the feasibility oracle.

use super::*;
use matchdraw_test::{
    champions_league_2022, forced_pair, has_matching_with, infeasible, open, random_problem,
};

#[test]
fn test_single_remaining_item_is_feasible_without_recursion() {
    let matrix = CompatibilityMatrix::full(3).unwrap();
    let remaining = Remaining::from_indices([2]);
    let mut oracle = FeasibilityOracle::new();

    assert!(oracle.feasible(&matrix, &remaining, 2, 1));
    assert_eq!(oracle.stats().misses, 1);
    assert_eq!(oracle.cache().len(), 1);
}

#[test]
fn test_forbidden_cell_is_infeasible() {
    let mut matrix = CompatibilityMatrix::full(2).unwrap();
    matrix.forbid(0, 1);
    let mut oracle = FeasibilityOracle::new();

    assert!(!oracle.feasible(&matrix, &Remaining::all(2).unwrap(), 0, 1));
    assert!(!oracle.feasible(&matrix, &Remaining::from_indices([0]), 0, 1));
}

#[test]
fn test_item_not_remaining_is_infeasible() {
    let matrix = CompatibilityMatrix::full(3).unwrap();
    let remaining = Remaining::from_indices([1, 2]);
    let mut oracle = FeasibilityOracle::new();

    assert!(!oracle.feasible(&matrix, &remaining, 0, 0));
}

#[test]
fn test_out_of_range_partner_is_infeasible() {
    let matrix = CompatibilityMatrix::full(3).unwrap();
    let mut oracle = FeasibilityOracle::new();

    assert!(!oracle.feasible(&matrix, &Remaining::all(3).unwrap(), 0, 3));
    assert!(!oracle.feasible(&matrix, &Remaining::all(3).unwrap(), 200, 0));
    assert!(oracle.cache().is_empty());
}

#[test]
fn test_open_problem_everything_feasible() {
    let problem = open(4);
    let matrix = problem.initial_matrix();
    let remaining = Remaining::all(4).unwrap();
    let mut oracle = FeasibilityOracle::new();

    for a in 0..4 {
        for b in 0..4 {
            assert!(oracle.feasible(&matrix, &remaining, a, b), "({a}, {b})");
        }
    }
}

#[test]
fn test_forced_pair_prunes_stranding_choice() {
    let problem = forced_pair();
    let matrix = problem.initial_matrix();
    let remaining = Remaining::all(2).unwrap();
    let mut oracle = FeasibilityOracle::new();

    assert!(!oracle.feasible(&matrix, &remaining, 0, 0));
    assert!(oracle.feasible(&matrix, &remaining, 0, 1));
    assert!(oracle.feasible(&matrix, &remaining, 1, 0));
    assert!(!oracle.feasible(&matrix, &remaining, 1, 1));
}

#[test]
fn test_infeasible_problem_has_no_feasible_pair() {
    let problem = infeasible();
    let matrix = problem.initial_matrix();
    let remaining = Remaining::all(3).unwrap();
    let mut oracle = FeasibilityOracle::new();

    for a in 0..3 {
        for b in 0..3 {
            assert!(!oracle.feasible(&matrix, &remaining, a, b), "({a}, {b})");
        }
    }
}

#[test]
fn test_caller_matrix_untouched() {
    let problem = champions_league_2022();
    let matrix = problem.initial_matrix();
    let before = matrix.clone();
    let remaining = Remaining::all(8).unwrap();
    let mut oracle = FeasibilityOracle::new();

    for b in 0..8 {
        oracle.feasible(&matrix, &remaining, 3, b);
    }
    assert_eq!(matrix, before);
    assert_eq!(remaining, Remaining::all(8).unwrap());
}

#[test]
fn test_repeat_query_hits_cache() {
    let problem = champions_league_2022();
    let matrix = problem.initial_matrix();
    let remaining = Remaining::all(8).unwrap();
    let mut oracle = FeasibilityOracle::new();

    let first = oracle.feasible(&matrix, &remaining, 0, 1);
    let before = oracle.stats();
    let second = oracle.feasible(&matrix, &remaining, 0, 1);

    assert_eq!(first, second);
    assert_eq!(oracle.stats().misses, before.misses);
    assert_eq!(oracle.stats().hits, before.hits + 1);
    assert!(oracle.stats().hit_rate() > 0.0);
}

#[test]
fn test_answers_independent_of_cache_contents() {
    let problem = champions_league_2022();
    let matrix = problem.initial_matrix();
    let remaining = Remaining::all(8).unwrap();

    let mut warm = FeasibilityOracle::new();
    for a in (0..8).rev() {
        for b in (0..8).rev() {
            warm.feasible(&matrix, &remaining, a, b);
        }
    }

    for a in 0..8 {
        for b in 0..8 {
            let mut cold = FeasibilityOracle::new();
            assert_eq!(
                cold.feasible(&matrix, &remaining, a, b),
                warm.feasible(&matrix, &remaining, a, b),
                "({a}, {b})"
            );
        }
    }
}

#[test]
fn test_matches_brute_force() {
    for seed in 0..40 {
        let n = 3 + (seed as usize % 3);
        let problem = random_problem(n, 0.4, seed);
        let matrix = problem.initial_matrix();
        let remaining = Remaining::all(n).unwrap();
        let mut oracle = FeasibilityOracle::new();

        for a in 0..n {
            for b in 0..n {
                assert_eq!(
                    oracle.feasible(&matrix, &remaining, a, b),
                    has_matching_with(&matrix, &remaining, a, b),
                    "seed {seed}, ({a}, {b})"
                );
            }
        }
    }
}

#[test]
fn test_matches_brute_force_mid_trial() {
    let problem = random_problem(5, 0.3, 99);
    let mut matrix = problem.initial_matrix();
    matrix.clear_column(2);
    let remaining = Remaining::from_indices([4, 0, 3, 1]);
    let mut oracle = FeasibilityOracle::new();

    for &a in &[4, 0, 3, 1] {
        for b in 0..5 {
            assert_eq!(
                oracle.feasible(&matrix, &remaining, a, b),
                has_matching_with(&matrix, &remaining, a, b),
                "({a}, {b})"
            );
        }
    }
}

#[test]
fn test_clearing_a_cell_never_restores_feasibility() {
    let problem = champions_league_2022();
    let matrix = problem.initial_matrix();
    let remaining = Remaining::all(8).unwrap();
    let mut oracle = FeasibilityOracle::new();

    for x in 0..8 {
        for y in matrix.allowed(x) {
            let mut cleared = matrix.clone();
            cleared.forbid(x, y);
            for a in 0..8 {
                for b in 0..8 {
                    if !oracle.feasible(&matrix, &remaining, a, b) {
                        assert!(
                            !oracle.feasible(&cleared, &remaining, a, b),
                            "clearing ({x}, {y}) made ({a}, {b}) feasible"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_with_cache_reuses_answers() {
    let problem = champions_league_2022();
    let matrix = problem.initial_matrix();
    let remaining = Remaining::all(8).unwrap();

    let mut first = FeasibilityOracle::new();
    let answers: Vec<bool> = (0..8)
        .map(|b| first.feasible(&matrix, &remaining, 0, b))
        .collect();

    let mut second = FeasibilityOracle::with_cache(first.into_cache());
    for (b, &expected) in answers.iter().enumerate() {
        assert_eq!(second.feasible(&matrix, &remaining, 0, b), expected);
    }
    assert_eq!(second.stats().misses, 0);
    assert_eq!(second.stats().hits, 8);
}
