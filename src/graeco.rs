//! Graeco-Latin squares and the search for orthogonal pairs.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;

use crate::LatinSquare;

/// Number of ordered Latin-square pairs, keyed by how many distinct symbol
/// pairs their superposition realizes.
pub type Histogram = BTreeMap<usize, u64>;

/// A Graeco-Latin square of order `n`.
///
/// Each cell holds a pair `(x, y)`: `x` from a first Latin square and `y`
/// from a second one, orthogonal to it. Across the `n²` cells every pair in
/// `{0..n-1}²` occurs exactly once. Values are only produced by
/// [`GraecoLatinSquare::from_pair`] and by transformations that keep this
/// property.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraecoLatinSquare {
    n: usize,
    cells: Vec<(u8, u8)>,
}

impl GraecoLatinSquare {
    /// Counts the distinct pairs `(p[r][c], q[r][c])` over all cells.
    ///
    /// # Panics
    /// Panics if the squares have different orders.
    pub fn distinct_pairs(p: &LatinSquare, q: &LatinSquare) -> usize {
        assert_eq!(p.n(), q.n(), "squares must have the same order");
        let n = p.n();
        let mut seen = vec![false; n * n];
        let mut count = 0;
        for (&x, &y) in p.cells().iter().zip(q.cells()) {
            let slot = &mut seen[x as usize * n + y as usize];
            if !*slot {
                *slot = true;
                count += 1;
            }
        }
        count
    }

    /// Superimposes `p` and `q`, returning `None` unless they are orthogonal.
    ///
    /// # Panics
    /// Panics if the squares have different orders.
    pub fn from_pair(p: &LatinSquare, q: &LatinSquare) -> Option<Self> {
        let n = p.n();
        if Self::distinct_pairs(p, q) != n * n {
            return None;
        }
        Some(Self::zip(p, q))
    }

    fn zip(p: &LatinSquare, q: &LatinSquare) -> Self {
        let cells = p.cells().iter().copied().zip(q.cells().iter().copied()).collect();
        Self { n: p.n(), cells }
    }

    pub(crate) fn from_cells(n: usize, cells: Vec<(u8, u8)>) -> Self {
        debug_assert_eq!(cells.len(), n * n);
        Self { n, cells }
    }

    /// Returns the order of the square.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the pair at position `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r >= n` or `c >= n`.
    pub fn get(&self, r: usize, c: usize) -> (u8, u8) {
        assert!(r < self.n && c < self.n, "index out of bounds");
        self.cells[r * self.n + c]
    }

    /// Returns row `r` as a slice of pairs.
    pub fn row(&self, r: usize) -> &[(u8, u8)] {
        &self.cells[r * self.n..(r + 1) * self.n]
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[(u8, u8)]> {
        self.cells.chunks(self.n.max(1))
    }

    /// Returns the cells as a flat slice in row-major order.
    pub fn cells(&self) -> &[(u8, u8)] {
        &self.cells
    }

    /// The Latin square formed by the first components.
    pub fn first(&self) -> LatinSquare {
        LatinSquare::from_cells_unchecked(self.n, self.cells.iter().map(|&(x, _)| x).collect())
    }

    /// The Latin square formed by the second components.
    pub fn second(&self) -> LatinSquare {
        LatinSquare::from_cells_unchecked(self.n, self.cells.iter().map(|&(_, y)| y).collect())
    }
}

impl fmt::Display for GraecoLatinSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

/// Tests every ordered pair of `latin_squares` for orthogonality.
///
/// Self pairs are included. Every pair is counted in the histogram under its
/// [`distinct_pairs`](GraecoLatinSquare::distinct_pairs) value; the pairs that
/// reach `n²` are returned as Graeco-Latin squares.
pub fn find_graeco_latin(
    latin_squares: &BTreeSet<LatinSquare>,
) -> (BTreeSet<GraecoLatinSquare>, Histogram) {
    let mut found = BTreeSet::new();
    let mut histogram = Histogram::new();
    for p in latin_squares {
        let full = p.n() * p.n();
        for q in latin_squares {
            let k = GraecoLatinSquare::distinct_pairs(p, q);
            *histogram.entry(k).or_insert(0) += 1;
            if k == full {
                found.insert(GraecoLatinSquare::zip(p, q));
            }
        }
    }
    debug!(
        pairs = latin_squares.len() * latin_squares.len(),
        count = found.len(),
        "tested Latin square pairs"
    );
    (found, histogram)
}
