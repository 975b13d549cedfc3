//! Tests for single-trial draw generation.

use super::*;
use matchdraw_test::{
    champions_league_2022, forced_pair, infeasible, infeasible_late, open, random_problem,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_forced_pair_always_same_draw() {
    let problem = forced_pair();
    let simulator = DrawSimulator::new(&problem);
    let mut oracle = FeasibilityOracle::new();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..200 {
        let draw = simulator.draw(&mut oracle, &mut rng).unwrap();
        assert_eq!(draw.partner(0), Some(1));
        assert_eq!(draw.partner(1), Some(0));
    }
}

#[test]
fn test_every_draw_is_valid_matching() {
    let problem = champions_league_2022();
    let simulator = DrawSimulator::new(&problem);
    let mut oracle = FeasibilityOracle::new();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..500 {
        let draw = simulator.draw(&mut oracle, &mut rng).unwrap();
        assert!(draw.is_valid_for(&problem), "{draw:?}");
        assert_eq!(draw.draw_order().len(), 8);
    }
}

#[test]
fn test_random_problems_never_dead_end() {
    for seed in 0..30 {
        let problem = random_problem(6, 0.35, seed);
        let simulator = DrawSimulator::new(&problem);
        let mut oracle = FeasibilityOracle::new();
        let mut rng = StdRng::seed_from_u64(seed);

        if simulator.check_feasible(&mut oracle).is_err() {
            assert!(simulator.draw(&mut oracle, &mut rng).is_err());
            continue;
        }
        for _ in 0..50 {
            let draw = simulator.draw(&mut oracle, &mut rng).unwrap();
            assert!(draw.is_valid_for(&problem), "seed {seed}: {draw:?}");
        }
    }
}

#[test]
fn test_check_feasible_accepts_open_problem() {
    let problem = open(5);
    let simulator = DrawSimulator::new(&problem);
    assert!(simulator.check_feasible(&mut FeasibilityOracle::new()).is_ok());
}

#[test]
fn test_infeasible_problem_rejected() {
    let problem = infeasible();
    let simulator = DrawSimulator::new(&problem);
    let mut oracle = FeasibilityOracle::new();

    let err = simulator.check_feasible(&mut oracle).unwrap_err();
    assert!(matches!(err, MatchDrawError::Infeasible { ref item } if item == "a0"));

    let mut rng = StdRng::seed_from_u64(0);
    let err = simulator.draw(&mut oracle, &mut rng).unwrap_err();
    assert!(matches!(err, MatchDrawError::Infeasible { .. }));
}

#[test]
fn test_late_infeasibility_caught_before_first_trial() {
    let problem = infeasible_late();
    let simulator = DrawSimulator::new(&problem);
    let matrix = simulator.initial_matrix();

    // Every item still has a partner in the matrix.
    for a in 0..3 {
        assert!(matrix.allowed_count(a) > 0);
    }
    assert!(simulator.check_feasible(&mut FeasibilityOracle::new()).is_err());
}

#[test]
fn test_same_seed_same_draws() {
    let problem = champions_league_2022();
    let simulator = DrawSimulator::new(&problem);

    let draws = |seed| {
        let mut oracle = FeasibilityOracle::new();
        let mut rng = StdRng::seed_from_u64(seed);
        (0..20)
            .map(|_| simulator.draw(&mut oracle, &mut rng).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(draws(5), draws(5));
}

#[test]
fn test_cached_oracle_does_not_change_draws() {
    let problem = champions_league_2022();
    let simulator = DrawSimulator::new(&problem);

    let mut warm = FeasibilityOracle::new();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        simulator.draw(&mut warm, &mut rng).unwrap();
    }

    let mut cold = FeasibilityOracle::new();
    let mut cold_rng = StdRng::seed_from_u64(42);
    let mut warm_rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        assert_eq!(
            simulator.draw(&mut cold, &mut cold_rng).unwrap(),
            simulator.draw(&mut warm, &mut warm_rng).unwrap()
        );
    }
}
