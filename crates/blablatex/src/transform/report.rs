//! Per-file and batch reports.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Severity;
use crate::error::BlablaError;

use super::Mode;

/// Number of scored blocks per severity tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub very_high: usize,
    pub unrated: usize,
}

impl SeverityCounts {
    /// Count one score.
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
            Severity::VeryHigh => self.very_high += 1,
            Severity::Unrated => self.unrated += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.very_high + self.unrated
    }
}

/// What happened to one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// File that was rewritten.
    pub path: PathBuf,
    /// Where the original was kept (None for dry runs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    pub mode: Mode,
    /// SHA-256 of the original contents.
    pub source_hash: String,
    /// Blocks seen (annotate mode).
    pub blocks: usize,
    /// Blocks sent to the scorer.
    pub scored: usize,
    /// Highest score in the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    pub severities: SeverityCounts,
    /// Lines dropped (remove mode).
    pub lines_removed: usize,
    pub processed_at: DateTime<Utc>,
}

impl FileReport {
    pub(crate) fn new(path: PathBuf, mode: Mode, source_hash: String) -> Self {
        Self {
            path,
            backup: None,
            mode,
            source_hash,
            blocks: 0,
            scored: 0,
            max_score: None,
            severities: SeverityCounts::default(),
            lines_removed: 0,
            processed_at: Utc::now(),
        }
    }

    /// Account for one scored block.
    pub(crate) fn record_score(&mut self, score: f64) {
        self.scored += 1;
        self.severities.record(Severity::from_score(score));
        self.max_score = Some(match self.max_score {
            Some(max) if max >= score => max,
            _ => score,
        });
    }
}

/// Final state of a file in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Rewritten successfully.
    Transformed,
    /// Left untouched because of a backup collision.
    Skipped,
    /// Failed after the backup was taken; the original was restored.
    Failed,
}

/// Result of one file in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<FileReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    pub(crate) fn transformed(report: FileReport) -> Self {
        Self {
            path: report.path.clone(),
            status: OutcomeStatus::Transformed,
            report: Some(report),
            error_kind: None,
            error: None,
        }
    }

    pub(crate) fn from_error(path: PathBuf, err: &BlablaError) -> Self {
        let status = if err.is_backup() {
            OutcomeStatus::Skipped
        } else {
            OutcomeStatus::Failed
        };
        Self {
            path,
            status,
            report: None,
            error_kind: Some(err.kind().to_string()),
            error: Some(err.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Transformed
    }
}

/// Results of a multi-file run, in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.files.push(outcome);
    }

    /// Files rewritten successfully.
    pub fn succeeded(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.is_success())
    }

    /// Files skipped or failed.
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| !f.is_success())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}
