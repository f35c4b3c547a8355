//! Example: loading a pattern file and scanning an input file with it.
//!
//! The pattern file uses the counted line format: a pattern count on the
//! first line, then one pattern per line. Every match is printed as
//! `<offset of last byte> <pattern id> <pattern>`.
//!
//! Run with: cargo run --example scan -- PATTERNS INPUT [CAPACITY]
//!
//! Set `RUST_LOG=debug` to see build progress.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use libaho::aho::{Builder, Config, PatternSource};

/// Finds every occurrence of a set of patterns in a file.
#[derive(Parser, Debug)]
#[command(name = "scan", about, long_about = None)]
struct Args {
    /// Pattern file: a pattern count, then one pattern per line.
    #[arg(value_name = "PATTERNS")]
    patterns: PathBuf,

    /// File to scan.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Maximum number of automaton states, root included.
    #[arg(default_value_t = 1 << 20)]
    capacity: usize,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = Config::new(args.capacity);
    let patterns = PatternSource::from_config(&config).load_file(&args.patterns)?;

    let mut builder = Builder::from_config(&config)?;
    for pattern in &patterns {
        builder.insert(pattern)?;
    }
    let automaton = builder.build();
    println!(
        "{} patterns, {} states",
        automaton.pattern_count(),
        automaton.state_count()
    );

    let input = std::fs::read(&args.input)?;
    let mut count = 0usize;
    for m in automaton.find_overlapping_iter(&input) {
        let pattern = &patterns[m.pattern().index()];
        println!("{} {} {}", m.last(), m.pattern(), String::from_utf8_lossy(pattern.bytes()));
        count += 1;
    }
    println!("{count} matches");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    run(&Args::parse())
}
