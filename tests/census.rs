use graeco_latin::{
    Census, CensusParams, GraecoLatinSquare, all_permutations, canonical_form, canonicalize,
    census, enumerate_latin_squares, find_graeco_latin,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;

#[test]
fn order_four_counts() {
    let census = census(4);
    assert_eq!(census.latin_squares().len(), 576);
    assert_eq!(census.graeco_latin_squares().len(), 6912);
    assert_eq!(census.histogram()[&16], 6912);
    assert_eq!(census.reduced().len(), 2);
}

#[test]
fn rerun_is_identical() {
    let params = CensusParams::default();
    let first = Census::run(&params);
    let second = Census::run(&params);
    assert_eq!(first, second);
}

#[test]
fn shuffled_input_gives_same_sets() {
    let reference = census(4);
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    let mut perms = all_permutations(4);
    perms.shuffle(&mut rng);

    let latin = enumerate_latin_squares(&perms);
    assert_eq!(&latin, reference.latin_squares());
    let (graeco_latin, histogram) = find_graeco_latin(&latin);
    assert_eq!(&graeco_latin, reference.graeco_latin_squares());
    assert_eq!(&histogram, reference.histogram());
    assert_eq!(&canonicalize(&graeco_latin), reference.reduced());
}

#[test]
fn every_graeco_latin_square_reduces_to_a_listed_form() {
    let census = census(4);
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    for g in census.graeco_latin_squares() {
        let pairs: HashSet<_> = g.cells().iter().collect();
        assert_eq!(pairs.len(), 16);
        assert_eq!(GraecoLatinSquare::from_pair(&g.first(), &g.second()).as_ref(), Some(g));

        let reduced = canonical_form(g);
        assert!(census.reduced().contains(&reduced));
        assert_eq!(canonical_form(&g.scramble(&mut rng)), reduced);
    }
}

#[test]
fn reduced_forms_satisfy_normal_form() {
    for g in census(4).reduced() {
        assert_eq!(g.row(0), &[(0, 0), (1, 1), (2, 2), (3, 3)]);
        let column: Vec<u8> = (0..4).map(|r| g.get(r, 0).0).collect();
        assert_eq!(column, vec![0, 1, 2, 3]);
        assert_eq!(&canonical_form(g), g);
    }
}
