//! Draw problems with known properties.

use matchdraw_core::{DrawProblem, Item};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// n×n problem without exclusions.
pub fn open(n: usize) -> DrawProblem {
    with_exclusions(n, &[])
}

/// n×n problem where each listed `(a, b)` pair may not meet.
///
/// Each pair gets its own tag, so no other pairing is affected.
pub fn with_exclusions(n: usize, pairs: &[(usize, usize)]) -> DrawProblem {
    let tags_for = |side_a: bool, index: usize| -> Vec<String> {
        pairs
            .iter()
            .filter(|&&(a, b)| if side_a { a == index } else { b == index })
            .map(|(a, b)| format!("ex:{a}-{b}"))
            .collect()
    };
    let side_a = (0..n)
        .map(|a| Item::new(format!("a{a}"), tags_for(true, a)))
        .collect();
    let side_b = (0..n)
        .map(|b| Item::new(format!("b{b}"), tags_for(false, b)))
        .collect();
    DrawProblem::new(side_a, side_b).expect("fixture sides are equal and non-empty")
}

/// 2×2 problem whose only exclusion is a0–b0, forcing a0–b1 and a1–b0.
pub fn forced_pair() -> DrawProblem {
    with_exclusions(2, &[(0, 0)])
}

/// 3×3 problem where a0 is excluded from every partner.
pub fn infeasible() -> DrawProblem {
    with_exclusions(3, &[(0, 0), (0, 1), (0, 2)])
}

/// 3×3 problem where every single item has a partner but no complete
/// matching exists: a0 and a1 both depend on b0 alone.
pub fn infeasible_late() -> DrawProblem {
    with_exclusions(3, &[(0, 1), (0, 2), (1, 1), (1, 2)])
}

/// Random n×n problem excluding each pair with the given probability.
pub fn random_problem(n: usize, exclusion_probability: f64, seed: u64) -> DrawProblem {
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|a| (0..n).map(move |b| (a, b)))
        .filter(|_| rng.random_bool(exclusion_probability))
        .collect();
    with_exclusions(n, &pairs)
}

/// Champions League 2022/23 round of 16: runners-up (side A) against group
/// winners (side B), excluding same-country and same-group ties.
pub fn champions_league_2022() -> DrawProblem {
    let runners_up = [
        ("Liverpool", "England"),
        ("Brugge", "Belgium"),
        ("Inter", "Italy"),
        ("Frankfurt", "Germany"),
        ("Milan", "Italy"),
        ("Leipzig", "Germany"),
        ("Dortmund", "Germany"),
        ("PSG", "France"),
    ];
    let winners = [
        ("Napoli", "Italy"),
        ("Porto", "Portugal"),
        ("Bayern", "Germany"),
        ("Spurs", "England"),
        ("Chelsea", "England"),
        ("Real", "Spain"),
        ("City", "England"),
        ("Benfica", "Portugal"),
    ];
    let side = |teams: &[(&str, &str)]| -> Vec<Item> {
        teams
            .iter()
            .enumerate()
            .map(|(group, (name, country))| {
                Item::new(*name, [format!("country:{country}"), format!("group:{group}")])
            })
            .collect()
    };
    DrawProblem::new(side(&runners_up), side(&winners))
        .expect("fixture sides are equal and non-empty")
        .with_labels("Unseeded", "Seeded")
}
