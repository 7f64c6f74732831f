//! Exhaustive enumeration of Latin squares by row-wise backtracking.
//!
//! A Latin square of order `n` is a sequence of `n` permutations of
//! `{0..n-1}` in which no two rows hold the same symbol in the same column.
//! Rows are chosen one at a time; a candidate row is rejected as soon as it
//! clashes with a row already on the prefix, which prunes most of the `(n!)^n`
//! candidate tuples before they are completed.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{LatinSquare, Permutation};

/// Returns every Latin square whose rows are drawn from `permutations`.
///
/// Passing [`all_permutations(n)`](crate::all_permutations) yields all Latin
/// squares of order `n`. The result does not depend on the order of
/// `permutations`.
///
/// # Panics
/// Panics if the permutations do not all have the same length.
pub fn enumerate_latin_squares(permutations: &[Permutation]) -> BTreeSet<LatinSquare> {
    let mut squares = BTreeSet::new();
    let Some(first) = permutations.first() else {
        return squares;
    };
    let n = first.len();
    assert!(
        permutations.iter().all(|p| p.len() == n),
        "permutations must all have the same length"
    );

    let mut prefix: Vec<&Permutation> = Vec::with_capacity(n);
    extend(permutations, n, &mut prefix, &mut squares);

    debug!(order = n, count = squares.len(), "enumerated Latin squares");
    squares
}

/// Tries every non-clashing row at depth `prefix.len()`.
fn extend<'a>(
    permutations: &'a [Permutation],
    n: usize,
    prefix: &mut Vec<&'a Permutation>,
    out: &mut BTreeSet<LatinSquare>,
) {
    if prefix.len() == n {
        let cells = prefix.iter().flat_map(|p| p.as_slice()).copied().collect();
        out.insert(LatinSquare::from_cells_unchecked(n, cells));
        return;
    }
    for candidate in permutations {
        if prefix.iter().any(|row| row.clashes_with(candidate)) {
            continue;
        }
        prefix.push(candidate);
        extend(permutations, n, prefix, out);
        prefix.pop();
    }
}
