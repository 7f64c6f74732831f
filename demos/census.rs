//! Print the census of Latin and Graeco-Latin squares of a given order.
//!
//! Usage: cargo run --release --example census -- [n]
//!
//! Example:
//!   RUST_LOG=debug cargo run --release --example census -- 4

use graeco_latin::{Census, CensusParams};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut params = CensusParams::default();
    if let Some(arg) = args.get(1) {
        params.order = arg.parse().unwrap_or_else(|_| {
            eprintln!("Usage: {} [n]", args[0]);
            std::process::exit(1);
        });
    }
    if !(1..=4).contains(&params.order) {
        eprintln!("n must be in range 1..=4");
        std::process::exit(1);
    }

    let census = Census::run(&params);

    println!("Number of latin squares: {}", census.latin_squares().len());
    println!(
        "Number of graeco-latin squares: {}",
        census.graeco_latin_squares().len()
    );
    for (k, count) in census.histogram() {
        println!("{} {}", k, count);
    }
    println!(
        "Number of reduced graeco-latin squares: {}",
        census.reduced().len()
    );
    for square in census.reduced() {
        println!("{}", "-".repeat(40));
        print!("{}", square);
    }
}
