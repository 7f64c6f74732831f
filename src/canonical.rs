//! Reduction of Graeco-Latin squares to a normal form.
//!
//! Two Graeco-Latin squares are equivalent when one can be turned into the
//! other by permuting rows, permuting columns and relabeling the second
//! coordinate. The normal form picks one representative per class:
//!
//! 1. rows sorted, so column 0 reads `(0, _), (1, _), ..` top to bottom;
//! 2. columns sorted, so row 0 reads `(0, _), (1, _), ..` left to right;
//! 3. second coordinates renamed so that row 0 is `(0, 0), (1, 1), ..`.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::GraecoLatinSquare;

/// Returns the normal form of `square`.
///
/// The result is a fixed point: `canonical_form(&canonical_form(g)) ==
/// canonical_form(g)`.
pub fn canonical_form(square: &GraecoLatinSquare) -> GraecoLatinSquare {
    let n = square.n();

    let mut rows: Vec<&[(u8, u8)]> = square.rows().collect();
    rows.sort_unstable();
    // Every symbol appears once per column, so the row order is total on column 0.
    assert!(
        rows.iter().enumerate().all(|(i, row)| row[0].0 as usize == i),
        "column 0 is not a permutation after sorting rows"
    );

    let mut columns: Vec<Vec<(u8, u8)>> = (0..n)
        .map(|c| rows.iter().map(|row| row[c]).collect())
        .collect();
    columns.sort_unstable();
    assert!(
        columns.iter().enumerate().all(|(i, col)| col[0].0 as usize == i),
        "row 0 is not a permutation after sorting columns"
    );

    // tr[y] = x for every (x, y) in row 0.
    let mut tr = vec![u8::MAX; n];
    for col in &columns {
        let (x, y) = col[0];
        assert_eq!(tr[y as usize], u8::MAX, "row 0 repeats second symbol {}", y);
        tr[y as usize] = x;
    }

    let mut cells = Vec::with_capacity(n * n);
    for r in 0..n {
        cells.extend(columns.iter().map(|col| {
            let (x, y) = col[r];
            (x, tr[y as usize])
        }));
    }
    GraecoLatinSquare::from_cells(n, cells)
}

/// Reduces every square to its normal form, dropping duplicates.
pub fn canonicalize(squares: &BTreeSet<GraecoLatinSquare>) -> BTreeSet<GraecoLatinSquare> {
    squares.iter().map(canonical_form).collect()
}

impl GraecoLatinSquare {
    /// Returns true if this square is already in normal form.
    pub fn is_canonical(&self) -> bool {
        let n = self.n();
        (0..n).all(|i| {
            let s = i as u8;
            self.get(0, i) == (s, s) && self.get(i, 0).0 == s
        })
    }

    /// Returns an equivalent square: rows, columns and second symbols are
    /// shuffled uniformly at random.
    ///
    /// The result has the same [`canonical_form`] as `self`.
    pub fn scramble<R: Rng + ?Sized>(&self, rng: &mut R) -> GraecoLatinSquare {
        let n = self.n();
        let mut row_order: Vec<usize> = (0..n).collect();
        let mut col_order: Vec<usize> = (0..n).collect();
        let mut relabel: Vec<u8> = (0..n as u8).collect();
        row_order.shuffle(rng);
        col_order.shuffle(rng);
        relabel.shuffle(rng);

        let cells = row_order
            .iter()
            .flat_map(|&r| col_order.iter().map(move |&c| (r, c)))
            .map(|(r, c)| {
                let (x, y) = self.get(r, c);
                (x, relabel[y as usize])
            })
            .collect();
        GraecoLatinSquare::from_cells(n, cells)
    }
}
