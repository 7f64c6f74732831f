//! Benchmarks for the census pipeline at order 4.
//!
//! Each stage is measured on its own, with the previous stage's output
//! computed once outside the loop.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use graeco_latin::{
    all_permutations, canonicalize, census, enumerate_latin_squares, find_graeco_latin,
};

fn bench_enumerate_n4(c: &mut Criterion) {
    let perms = all_permutations(4);
    c.bench_function("enumerate_latin_squares_n4", |b| {
        b.iter(|| enumerate_latin_squares(black_box(&perms)))
    });
}

fn bench_find_graeco_latin_n4(c: &mut Criterion) {
    let latin = enumerate_latin_squares(&all_permutations(4));
    c.bench_function("find_graeco_latin_n4", |b| {
        b.iter(|| find_graeco_latin(black_box(&latin)))
    });
}

fn bench_canonicalize_n4(c: &mut Criterion) {
    let latin = enumerate_latin_squares(&all_permutations(4));
    let (graeco_latin, _) = find_graeco_latin(&latin);
    c.bench_function("canonicalize_n4", |b| {
        b.iter(|| canonicalize(black_box(&graeco_latin)))
    });
}

fn bench_census_n4(c: &mut Criterion) {
    c.bench_function("census_n4", |b| b.iter(|| census(black_box(4))));
}

criterion_group!(
    benches,
    bench_enumerate_n4,
    bench_find_graeco_latin_n4,
    bench_canonicalize_n4,
    bench_census_n4
);
criterion_main!(benches);
