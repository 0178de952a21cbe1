//! Blablatex CLI - annotate LaTeX paragraphs with their bullshit index.

mod cli;
mod run;

use clap::Parser;
use cli::Cli;
use colored::Colorize;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run::run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
