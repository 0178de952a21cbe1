//! Process the files given on the command line.

use std::sync::Arc;
use std::time::Duration;

use blablatex::{
    BatchReport, Blablatex, BlablameterScorer, FileOutcome, FileReport, Mode, MockScorer,
    OutcomeStatus, Scorer, ScorerConfig, TransformConfig,
};
use colored::Colorize;

use crate::cli::Cli;

/// Run the CLI; returns `true` if every file went through.
pub fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mode = if cli.remove { Mode::Remove } else { Mode::Annotate };

    let config = TransformConfig {
        mode,
        language: cli.lang,
        min_paragraph_len: cli.min_length,
        ..Default::default()
    };

    let mut blablatex = Blablatex::with_config(config);
    if mode == Mode::Annotate {
        blablatex = blablatex.with_shared_scorer(build_scorer(&cli)?);
    }

    if cli.dry_run {
        return preview(&blablatex, &cli);
    }

    let batch = process_all(&blablatex, &cli);

    if cli.json {
        println!("{}", render_json(&batch)?);
    } else if cli.files.len() > 1 {
        print_summary(&batch);
    }

    Ok(!batch.has_failures())
}

fn process_all(blablatex: &Blablatex, cli: &Cli) -> BatchReport {
    let mut batch = BatchReport::default();
    for file in &cli.files {
        let outcome = blablatex.process(file);
        if !cli.json {
            print_outcome(&outcome, cli.verbose);
        } else if !outcome.is_success() {
            print_failure(&outcome);
        }
        batch.push(outcome);
    }
    batch
}

fn render_json(batch: &BatchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(batch)
}

fn build_scorer(cli: &Cli) -> Result<Arc<dyn Scorer>, Box<dyn std::error::Error>> {
    if let Some(score) = cli.mock {
        return Ok(Arc::new(MockScorer::new(score)));
    }

    let mut config = ScorerConfig::default().with_timeout(Duration::from_secs(cli.timeout));
    if let Some(ref endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    Ok(Arc::new(BlablameterScorer::with_config(config)?))
}

fn preview(blablatex: &Blablatex, cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut all_ok = true;
    for file in &cli.files {
        match blablatex.preview(file) {
            Ok((output, report)) => {
                print!("{}", output);
                if cli.verbose {
                    eprintln!("{}", describe(&report).dimmed());
                }
            }
            Err(e) => {
                all_ok = false;
                eprintln!("{} {}: {}", "Error:".red().bold(), file.display(), e);
            }
        }
    }
    Ok(all_ok)
}

fn print_outcome(outcome: &FileOutcome, verbose: bool) {
    match outcome.report {
        Some(ref report) => {
            println!(
                "{} {}",
                "Done".green().bold(),
                outcome.path.display().to_string().white()
            );
            if verbose {
                println!("  {}", describe(report));
            }
        }
        None => print_failure(outcome),
    }
}

fn print_failure(outcome: &FileOutcome) {
    let label = match outcome.status {
        OutcomeStatus::Skipped => "Skipped".yellow().bold(),
        _ => "Failed".red().bold(),
    };
    eprintln!(
        "{} {}: {}",
        label,
        outcome.path.display(),
        outcome.error.as_deref().unwrap_or("unknown error")
    );
}

fn describe(report: &FileReport) -> String {
    match report.mode {
        Mode::Annotate => {
            let max = report
                .max_score
                .map(|m| format!(", max {:.2}", m))
                .unwrap_or_default();
            format!(
                "{} blocks, {} scored ({} low, {} medium, {} high, {} very high{})",
                report.blocks,
                report.scored,
                report.severities.low,
                report.severities.medium,
                report.severities.high,
                report.severities.very_high,
                max
            )
        }
        Mode::Remove => format!("{} lines removed", report.lines_removed),
    }
}

fn print_summary(batch: &BatchReport) {
    let done = batch.succeeded().count();
    let failed = batch.failures().count();
    println!();
    if failed == 0 {
        println!("  {} {} file(s) processed", "✓".green(), done);
    } else {
        println!(
            "  {} file(s) processed, {} not",
            done.to_string().white().bold(),
            failed.to_string().red().bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const LONG: &str = "Our transformative framework empowers agile teams to unlock synergistic value at scale today.";

    #[test]
    fn test_run_with_mock_scorer() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.tex");
        let b = dir.path().join("b.tex");
        let b_backup = dir.path().join("b.tex.org");
        fs::write(&a, format!("{}\n", LONG)).unwrap();
        fs::write(&b, "untouched\n").unwrap();
        fs::write(&b_backup, "older backup\n").unwrap();

        let cli = Cli::try_parse_from([
            "blablatex".to_string(),
            "--mock".to_string(),
            "0.61".to_string(),
            a.display().to_string(),
            b.display().to_string(),
        ])
        .unwrap();

        let all_ok = run(cli).unwrap();

        assert!(!all_ok);
        assert!(fs::read_to_string(&a).unwrap().contains("{0.61}{red}"));
        assert_eq!(fs::read_to_string(&b).unwrap(), "untouched\n");
        assert_eq!(fs::read_to_string(&b_backup).unwrap(), "older backup\n");
    }

    #[test]
    fn test_json_report_for_mixed_batch() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.tex");
        let b = dir.path().join("b.tex");
        fs::write(&a, format!("{}\n", LONG)).unwrap();
        fs::write(&b, "untouched\n").unwrap();
        fs::write(dir.path().join("b.tex.org"), "older backup\n").unwrap();

        let cli = Cli::try_parse_from([
            "blablatex".to_string(),
            "--json".to_string(),
            "--mock".to_string(),
            "0.25".to_string(),
            a.display().to_string(),
            b.display().to_string(),
        ])
        .unwrap();
        let blablatex = Blablatex::new().with_scorer(MockScorer::new(0.25));

        let batch = process_all(&blablatex, &cli);
        let json: serde_json::Value = serde_json::from_str(&render_json(&batch).unwrap()).unwrap();

        let files = json["files"].as_array().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0]["status"], "transformed");
        assert_eq!(files[0]["report"]["mode"], "annotate");
        assert_eq!(files[0]["report"]["scored"], 1);
        assert_eq!(files[0]["report"]["severities"]["medium"], 1);
        assert!(files[0]["report"]["source_hash"].as_str().unwrap().starts_with("sha256:"));
        assert_eq!(files[1]["status"], "skipped");
        assert_eq!(files[1]["error_kind"], "backup");
        assert!(files[1].get("report").is_none());
        assert!(batch.has_failures());
    }

    #[test]
    fn test_remove_needs_no_scorer() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.tex");
        fs::write(&a, "%blablatex\n\\end{blabla}\n%/blablatex\nkept\n").unwrap();

        let cli = Cli::try_parse_from(["blablatex".to_string(), "-r".to_string(), a.display().to_string()])
            .unwrap();

        assert!(run(cli).unwrap());
        assert_eq!(fs::read_to_string(&a).unwrap(), "kept\n");
    }

    #[test]
    fn test_dry_run_leaves_files() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.tex");
        fs::write(&a, format!("{}\n", LONG)).unwrap();

        let cli = Cli::try_parse_from([
            "blablatex".to_string(),
            "--dry-run".to_string(),
            "--mock".to_string(),
            "0.1".to_string(),
            a.display().to_string(),
        ])
        .unwrap();

        assert!(run(cli).unwrap());
        assert_eq!(fs::read_to_string(&a).unwrap(), format!("{}\n", LONG));
        assert!(!dir.path().join("a.tex.org").exists());
    }
}
