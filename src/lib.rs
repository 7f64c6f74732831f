#![doc = include_str!("../README.md")]

mod canonical;
mod census;
mod enumerate;
mod graeco;
mod permutation;
mod square;

pub use canonical::{canonical_form, canonicalize};
pub use census::{Census, CensusParams, census};
pub use enumerate::enumerate_latin_squares;
pub use graeco::{GraecoLatinSquare, Histogram, find_graeco_latin};
pub use permutation::{MAX_ORDER, Permutation, all_permutations};
pub use square::LatinSquare;
