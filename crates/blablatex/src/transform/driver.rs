//! Backup-and-rewrite of a single file.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::annotate::{Annotator, Remover, DEFAULT_MIN_PARAGRAPH_LEN};
use crate::document::segment;
use crate::error::{BlablaError, Result};
use crate::scorer::{Language, Scorer};

use super::backup::{Backup, DEFAULT_BACKUP_SUFFIX};
use super::report::FileReport;

/// What to do with a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Score paragraphs and add markers.
    #[default]
    Annotate,
    /// Strip previously added markers.
    Remove,
}

/// Configuration for file transforms.
#[derive(Debug, Clone)]
pub struct TransformConfig {
    pub mode: Mode,
    /// Language passed to the scorer.
    pub language: Language,
    /// Blocks at or under this many characters are not scored.
    pub min_paragraph_len: usize,
    /// Appended to the file name to form the backup path.
    pub backup_suffix: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Annotate,
            language: Language::En,
            min_paragraph_len: DEFAULT_MIN_PARAGRAPH_LEN,
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }
}

/// Applies one transform to one file.
pub struct FileTransform<'a> {
    config: &'a TransformConfig,
    scorer: Option<&'a dyn Scorer>,
}

impl<'a> FileTransform<'a> {
    /// Create a transform; annotate mode needs a scorer.
    pub fn new(config: &'a TransformConfig, scorer: Option<&'a dyn Scorer>) -> Self {
        Self { config, scorer }
    }

    fn annotator(&self) -> Result<Option<Annotator<'a>>> {
        match self.config.mode {
            Mode::Remove => Ok(None),
            Mode::Annotate => {
                let scorer = self.scorer.ok_or_else(|| {
                    BlablaError::Config("annotate mode needs a scorer".to_string())
                })?;
                Ok(Some(
                    Annotator::new(scorer, self.config.language)
                        .with_min_paragraph_len(self.config.min_paragraph_len),
                ))
            }
        }
    }

    /// Rewrite `path` in place, keeping the original at the backup path.
    ///
    /// A backup collision fails before anything is touched. Any later
    /// failure removes the partial output and moves the backup back.
    pub fn run(&self, path: &Path) -> Result<FileReport> {
        let annotator = self.annotator()?;
        let backup = Backup::create(path, &self.config.backup_suffix)?;
        info!("{} -> {}", path.display(), backup.path().display());

        match self.rewrite(&backup, annotator.as_ref()) {
            Ok(mut report) => {
                report.backup = Some(backup.path().to_path_buf());
                Ok(report)
            }
            Err(err) => {
                warn!("{} failed: {}; restoring original", path.display(), err);
                if let Err(restore_err) = backup.restore() {
                    error!("original left at backup path: {}", restore_err);
                }
                Err(err)
            }
        }
    }

    fn rewrite(&self, backup: &Backup, annotator: Option<&Annotator<'_>>) -> Result<FileReport> {
        let original = backup.original();
        let mut report = FileReport::new(
            original.to_path_buf(),
            self.config.mode,
            hash_file(backup.path())?,
        );

        let output = File::create(original).map_err(|e| BlablaError::io(original, e))?;
        let mut writer = BufWriter::new(output);

        match annotator {
            Some(annotator) => {
                let text = fs::read_to_string(backup.path())
                    .map_err(|e| BlablaError::io(backup.path(), e))?;
                annotate_blocks(annotator, &text, &mut report, |chunk| {
                    writer
                        .write_all(chunk.as_bytes())
                        .map_err(|e| BlablaError::io(original, e))
                })?;
            }
            None => {
                let input = File::open(backup.path())
                    .map_err(|e| BlablaError::io(backup.path(), e))?;
                let mut remover = Remover::new();
                remover
                    .strip(BufReader::new(input), &mut writer)
                    .map_err(|e| BlablaError::io(original, e))?;
                report.lines_removed = remover.suppressed();
            }
        }

        writer.flush().map_err(|e| BlablaError::io(original, e))?;
        info!(
            "{}: {} blocks, {} scored, {} lines removed",
            original.display(),
            report.blocks,
            report.scored,
            report.lines_removed
        );
        Ok(report)
    }

    /// Transform `path` without renaming or writing anything.
    pub fn preview(&self, path: &Path) -> Result<(String, FileReport)> {
        let annotator = self.annotator()?;
        let text = fs::read_to_string(path).map_err(|e| BlablaError::io(path, e))?;
        let mut report = FileReport::new(path.to_path_buf(), self.config.mode, hash_bytes(text.as_bytes()));

        let output = match annotator {
            Some(annotator) => {
                let mut out = String::with_capacity(text.len());
                annotate_blocks(&annotator, &text, &mut report, |chunk| {
                    out.push_str(chunk);
                    Ok(())
                })?;
                out
            }
            None => {
                let mut remover = Remover::new();
                let out = remover.strip_str(&text);
                report.lines_removed = remover.suppressed();
                out
            }
        };

        Ok((output, report))
    }
}

fn annotate_blocks(
    annotator: &Annotator<'_>,
    text: &str,
    report: &mut FileReport,
    mut emit: impl FnMut(&str) -> Result<()>,
) -> Result<()> {
    for block in segment(text) {
        report.blocks += 1;
        let annotated = annotator.annotate_block(&block)?;
        if let Some(score) = annotated.score {
            report.record_score(score);
        }
        emit(&annotated.text)?;
    }
    Ok(())
}

fn hash_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| BlablaError::io(path, e))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(|e| BlablaError::io(path, e))?;
    Ok(format!("sha256:{:x}", hasher.finalize()))
}

fn hash_bytes(bytes: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::MockScorer;
    use tempfile::TempDir;

    const LONG: &str = "Holistic stakeholder alignment drives scalable value creation across every vertical we touch.";

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_annotate_file() {
        let dir = TempDir::new().unwrap();
        let doc = format!("\\documentclass{{article}}\n\n{}\n", LONG);
        let path = write(&dir, "paper.tex", &doc);

        let scorer = MockScorer::new(0.45);
        let config = TransformConfig::default();
        let report = FileTransform::new(&config, Some(&scorer)).run(&path).unwrap();

        let backup = dir.path().join("paper.tex.org");
        assert_eq!(fs::read_to_string(&backup).unwrap(), doc);
        let annotated = fs::read_to_string(&path).unwrap();
        assert!(annotated.contains("\\usepackage{framed}"));
        assert!(annotated.contains("{0.45}{orange}"));

        assert_eq!(report.backup.as_deref(), Some(backup.as_path()));
        assert_eq!(report.blocks, 2);
        assert_eq!(report.scored, 1);
        assert_eq!(report.severities.high, 1);
        assert!(report.source_hash.starts_with("sha256:"));
    }

    #[test]
    fn test_remove_file() {
        let dir = TempDir::new().unwrap();
        let annotated = format!("Intro\n{}", crate::annotate::wrap("Body\n", 0.9));
        let path = write(&dir, "paper.tex", &annotated);

        let config = TransformConfig {
            mode: Mode::Remove,
            ..Default::default()
        };
        let report = FileTransform::new(&config, None).run(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Intro\nBody\n");
        assert_eq!(report.lines_removed, 6);
        assert_eq!(report.mode, Mode::Remove);
    }

    #[test]
    fn test_scoring_failure_restores_original() {
        let dir = TempDir::new().unwrap();
        let doc = format!("{}\n\n{}\n", LONG, LONG);
        let path = write(&dir, "paper.tex", &doc);

        let scorer = MockScorer::new(0.3).failing_after(1);
        let config = TransformConfig::default();
        let err = FileTransform::new(&config, Some(&scorer)).run(&path).unwrap_err();

        assert!(matches!(err, BlablaError::Service { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), doc);
        assert!(!dir.path().join("paper.tex.org").exists());
    }

    #[test]
    fn test_annotate_without_scorer_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "paper.tex", "text\n");

        let config = TransformConfig::default();
        let err = FileTransform::new(&config, None).run(&path).unwrap_err();

        assert!(matches!(err, BlablaError::Config(_)));
        assert!(path.exists());
        assert!(!dir.path().join("paper.tex.org").exists());
    }

    #[test]
    fn test_preview_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let doc = format!("{}\n", LONG);
        let path = write(&dir, "paper.tex", &doc);

        let scorer = MockScorer::new(0.05);
        let config = TransformConfig::default();
        let (output, report) = FileTransform::new(&config, Some(&scorer)).preview(&path).unwrap();

        assert!(output.contains("{0.05}{green}"));
        assert!(report.backup.is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), doc);
        assert!(!dir.path().join("paper.tex.org").exists());
    }

    #[test]
    fn test_custom_suffix_and_threshold() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "short.tex", "Twelve chars\n");

        let scorer = MockScorer::new(0.7);
        let config = TransformConfig {
            min_paragraph_len: 10,
            backup_suffix: ".bak".to_string(),
            ..Default::default()
        };
        let report = FileTransform::new(&config, Some(&scorer)).run(&path).unwrap();

        assert_eq!(report.scored, 1);
        assert!(dir.path().join("short.tex.bak").exists());
    }

    #[test]
    fn test_hash_matches_between_paths() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "h.tex", "same bytes");
        assert_eq!(hash_file(&path).unwrap(), hash_bytes(b"same bytes"));
    }
}
