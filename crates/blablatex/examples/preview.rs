//! Example: preview the annotation of a LaTeX file with a fixed score.
//!
//! Usage:
//!   cargo run --example preview -- <file_path> [score]
//!
//! Example:
//!   cargo run --example preview -- paper.tex 0.45

use std::env;
use std::path::Path;

use blablatex::{Blablatex, MockScorer};

fn main() -> blablatex::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example preview -- <file_path> [score]");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    let score = args
        .get(2)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.5);

    // Mock scorer: no network access needed
    let blablatex = Blablatex::new().with_scorer(MockScorer::new(score));
    let (output, report) = blablatex.preview(path)?;

    println!("{}", output);

    let separator = "=".repeat(80);
    eprintln!("{}", separator);
    eprintln!("File:   {}", report.path.display());
    eprintln!("Hash:   {}", report.source_hash);
    eprintln!("Blocks: {}", report.blocks);
    eprintln!("Scored: {}", report.scored);
    eprintln!("{}", separator);

    Ok(())
}
