//! CLI argument definitions using clap.

use std::path::PathBuf;

use blablatex::Language;
use clap::Parser;

const AFTER_HELP: &str = "\
WARNING! The original files will be replaced.
The originals are saved as `<texfile>.org`; a file whose backup already
exists is skipped.

Removal with -r only strips the %blablatex fenced lines; it does not
detect nested or unbalanced fences.";

/// Annotate LaTeX paragraphs with their bullshit index
#[derive(Parser, Debug)]
#[command(name = "blablatex")]
#[command(version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// LaTeX files to process
    #[arg(value_name = "TEXFILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Remove blablatex blocks rather than adding them
    #[arg(short, long)]
    pub remove: bool,

    /// Text language (en, de, es)
    #[arg(long, default_value = "en")]
    pub lang: Language,

    /// Paragraphs at or under this many characters are not scored
    #[arg(long, default_value_t = blablatex::annotate::DEFAULT_MIN_PARAGRAPH_LEN)]
    pub min_length: usize,

    /// Print the result to stdout instead of rewriting the files
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON report of the run
    #[arg(long)]
    pub json: bool,

    /// Scoring endpoint to use instead of the BlaBlaMeter site
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,

    /// Score every paragraph with this fixed value instead of calling the service
    #[arg(long, value_name = "SCORE")]
    pub mock: Option<f64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
