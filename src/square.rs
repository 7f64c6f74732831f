use std::fmt;

use crate::Permutation;

/// A Latin square of order `n`.
///
/// A Latin square is an `n x n` array with symbols `{0..n-1}` such that
/// each row and each column is a permutation of `{0..n-1}`.
///
/// Squares of equal order compare lexicographically by their row sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LatinSquare {
    n: usize,
    cells: Vec<u8>,
}

impl LatinSquare {
    /// Creates the cyclic Latin square of order `n`: `L[r][c] = (r + c) mod n`.
    ///
    /// # Panics
    /// Panics if `n < 1` or `n > 255`.
    pub fn new_cyclic(n: usize) -> Self {
        assert!((1..=255).contains(&n), "n must be in range 1..=255");
        let cells = (0..n)
            .flat_map(|r| (0..n).map(move |c| ((r + c) % n) as u8))
            .collect();
        Self { n, cells }
    }

    /// Assembles a square from its rows.
    ///
    /// # Panics
    /// Panics if the rows do not form a Latin square.
    pub fn from_rows(rows: &[Permutation]) -> Self {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "row length must equal the number of rows");
            cells.extend_from_slice(row.as_slice());
        }
        let sq = Self { n, cells };
        assert!(sq.is_latin(), "rows do not form a Latin square");
        sq
    }

    /// Returns the order of the Latin square.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the value at position `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r >= n` or `c >= n`.
    pub fn get(&self, r: usize, c: usize) -> u8 {
        assert!(r < self.n && c < self.n, "index out of bounds");
        self.cells[r * self.n + c]
    }

    /// Returns row `r` as a slice.
    pub fn row(&self, r: usize) -> &[u8] {
        &self.cells[r * self.n..(r + 1) * self.n]
    }

    /// Returns the cells as a flat slice in row-major order.
    ///
    /// The cell at position (r, c) is at index `r * n + c`.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Builds a square from row-major cells without checking the Latin property.
    pub(crate) fn from_cells_unchecked(n: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), n * n);
        Self { n, cells }
    }

    /// Returns true if this is a valid Latin square.
    ///
    /// The property is enforced by every constructor; this is the check
    /// they use.
    pub fn is_latin(&self) -> bool {
        let n = self.n;
        let mut seen = vec![false; n];
        // Check rows
        for r in 0..n {
            seen.fill(false);
            for c in 0..n {
                let v = self.get(r, c) as usize;
                if v >= n || seen[v] {
                    return false;
                }
                seen[v] = true;
            }
        }
        // Check columns
        for c in 0..n {
            seen.fill(false);
            for r in 0..n {
                let v = self.get(r, c) as usize;
                if v >= n || seen[v] {
                    return false;
                }
                seen[v] = true;
            }
        }
        true
    }
}

impl fmt::Display for LatinSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.n {
            writeln!(f, "{:?}", self.row(r))?;
        }
        Ok(())
    }
}
