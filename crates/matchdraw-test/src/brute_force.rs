//! Exhaustive enumeration of perfect matchings.

use matchdraw_core::{CompatibilityMatrix, Remaining};

/// Returns every perfect matching of `matrix` as a partner vector
/// (`partners[a] = b`).
pub fn perfect_matchings(matrix: &CompatibilityMatrix) -> Vec<Vec<usize>> {
    let n = matrix.size();
    let mut result = Vec::new();
    let mut partners = Vec::with_capacity(n);
    let mut used = vec![false; n];
    extend(matrix, 0, &mut partners, &mut used, &mut result);
    result
}

fn extend(
    matrix: &CompatibilityMatrix,
    a: usize,
    partners: &mut Vec<usize>,
    used: &mut [bool],
    result: &mut Vec<Vec<usize>>,
) {
    if a == matrix.size() {
        result.push(partners.clone());
        return;
    }
    for b in matrix.allowed(a) {
        if !used[b] {
            used[b] = true;
            partners.push(b);
            extend(matrix, a + 1, partners, used, result);
            partners.pop();
            used[b] = false;
        }
    }
}

/// Returns true if the items of `remaining` can all be matched within
/// `matrix` with `a` taking `b`.
pub fn has_matching_with(
    matrix: &CompatibilityMatrix,
    remaining: &Remaining,
    a: usize,
    b: usize,
) -> bool {
    if !matrix.is_allowed(a, b) || !remaining.contains(a) {
        return false;
    }
    let mut used = vec![false; matrix.size()];
    used[b] = true;
    let rest: Vec<usize> = remaining.iter().filter(|&x| x != a).collect();
    assign(matrix, &rest, &mut used)
}

fn assign(matrix: &CompatibilityMatrix, rest: &[usize], used: &mut [bool]) -> bool {
    let Some((&a, tail)) = rest.split_first() else {
        return true;
    };
    for b in matrix.allowed(a) {
        if !used[b] {
            used[b] = true;
            let found = assign(matrix, tail, used);
            used[b] = false;
            if found {
                return true;
            }
        }
    }
    false
}
