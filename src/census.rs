use std::collections::BTreeSet;

use tracing::info;

use crate::{
    GraecoLatinSquare, Histogram, LatinSquare, MAX_ORDER, all_permutations, canonicalize,
    enumerate_latin_squares, find_graeco_latin,
};

/// Parameters for a census run.
#[derive(Debug, Clone)]
pub struct CensusParams {
    /// Order of the squares.
    ///
    /// Latin squares are enumerated exhaustively and then paired with each
    /// other, so the cost grows with the square of their number. Order 4 runs
    /// instantly; order 5 enumerates quickly but its 161,280² pairs are far
    /// beyond a practical run.
    pub order: usize,
}

impl Default for CensusParams {
    fn default() -> Self {
        Self { order: 4 }
    }
}

/// The outcome of running the whole pipeline for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Census {
    order: usize,
    latin_squares: BTreeSet<LatinSquare>,
    graeco_latin_squares: BTreeSet<GraecoLatinSquare>,
    histogram: Histogram,
    reduced: BTreeSet<GraecoLatinSquare>,
}

impl Census {
    /// Enumerates Latin squares, pairs them into Graeco-Latin squares and
    /// reduces those to normal form.
    ///
    /// The output is deterministic: every set iterates in sorted order.
    ///
    /// # Panics
    /// Panics if `order` is not in `1..=MAX_ORDER`.
    pub fn run(params: &CensusParams) -> Self {
        let order = params.order;
        assert!(
            (1..=MAX_ORDER).contains(&order),
            "order must be in range 1..={}",
            MAX_ORDER
        );

        let latin_squares = enumerate_latin_squares(&all_permutations(order));
        info!(order, count = latin_squares.len(), "Latin squares");

        let (graeco_latin_squares, histogram) = find_graeco_latin(&latin_squares);
        info!(order, count = graeco_latin_squares.len(), "Graeco-Latin squares");

        let reduced = canonicalize(&graeco_latin_squares);
        info!(order, count = reduced.len(), "reduced Graeco-Latin squares");

        Self {
            order,
            latin_squares,
            graeco_latin_squares,
            histogram,
            reduced,
        }
    }

    /// Returns the order the census was run for.
    pub fn order(&self) -> usize {
        self.order
    }

    /// All Latin squares of this order, in lexicographic order.
    pub fn latin_squares(&self) -> &BTreeSet<LatinSquare> {
        &self.latin_squares
    }

    /// All Graeco-Latin squares built from ordered pairs of Latin squares.
    pub fn graeco_latin_squares(&self) -> &BTreeSet<GraecoLatinSquare> {
        &self.graeco_latin_squares
    }

    /// Distinct-pair counts over all ordered pairs of Latin squares.
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// The Graeco-Latin squares in normal form.
    pub fn reduced(&self) -> &BTreeSet<GraecoLatinSquare> {
        &self.reduced
    }
}

/// Runs a census for squares of order `order`.
///
/// Shorthand for [`Census::run`] with the given order.
///
/// # Panics
/// Panics if `order` is not in `1..=MAX_ORDER`.
pub fn census(order: usize) -> Census {
    Census::run(&CensusParams { order })
}
