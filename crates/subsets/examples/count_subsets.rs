//! Example counting subsets by size.
//!
//! This example shows how to:
//! - Build `Subsets` from an ordered or unordered input set
//! - Traverse the subsets sequentially or in parallel with rayon
//! - Cross-check the counts per size against binomial coefficients
//!
//! # Usage
//!
//! ```sh
//! cargo run --example count_subsets
//! ```
//!
//! Count the subsets of a larger set, on the calling thread only:
//!
//! ```sh
//! cargo run --example count_subsets -- --elements 20 --sequential
//! ```
//!
//! Print the subsets themselves (small inputs only):
//!
//! ```sh
//! cargo run --example count_subsets -- --elements 4 --input sorted --print
//! ```
//!
//! Set `RUST_LOG=trace` to see how the range is split across threads.

use std::{
    collections::{BTreeSet, HashSet},
    process,
};

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use subsets::{Subsets, combinatorial::binomial};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputKind {
    Hashed,
    Sorted,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of elements in the input set.
    #[arg(short, long, value_name = "COUNT", default_value_t = 16)]
    elements: u32,

    /// Kind of input set, deciding the kind of the produced subsets.
    #[arg(long, value_name = "KIND", default_value = "hashed")]
    input: InputKind,

    /// Traverse on the calling thread instead of the rayon pool.
    #[arg(long)]
    sequential: bool,

    /// Print every subset.
    #[arg(long)]
    print: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = match args.input {
        InputKind::Hashed => Subsets::from_set(&(0..args.elements).collect::<HashSet<_>>()),
        InputKind::Sorted => Subsets::from_set(&(0..args.elements).collect::<BTreeSet<_>>()),
    };
    let subsets = match result {
        Ok(subsets) => subsets,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if args.print {
        match subsets.to_vec() {
            Ok(all) => {
                for (position, subset) in all.iter().enumerate() {
                    println!("{position:>8}: {subset:?}");
                }
                println!();
            }
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        }
    }

    let n = subsets.len();
    let counts = subsets
        .stream(!args.sequential)
        .fold(
            || vec![0_u64; n + 1],
            |mut counts, subset| {
                counts[subset.len()] += 1;
                counts
            },
        )
        .reduce(
            || vec![0_u64; n + 1],
            |a, b| a.iter().zip(&b).map(|(x, y)| x + y).collect(),
        );

    println!("Subsets of {n} elements ({}):", subsets.capability().kind());
    let mut mismatch = false;
    for (k, count) in counts.iter().enumerate() {
        let expected = binomial(n as u64, k as u64).unwrap();
        let mark = if *count == expected { "" } else { "  MISMATCH" };
        mismatch |= *count != expected;
        println!("  size {k:>2}: {count}{mark}");
    }
    println!("  total: {}", counts.iter().sum::<u64>());

    if mismatch {
        process::exit(1);
    }
}
