//! Main Blablatex struct and public API.

use std::path::Path;
use std::sync::Arc;

use log::warn;

use crate::error::Result;
use crate::scorer::Scorer;
use crate::transform::{BatchReport, FileOutcome, FileReport, FileTransform, TransformConfig};

/// Annotates or cleans LaTeX files, one at a time.
pub struct Blablatex {
    config: TransformConfig,
    scorer: Option<Arc<dyn Scorer>>,
}

impl Blablatex {
    /// Create an instance with default configuration (annotate, English).
    pub fn new() -> Self {
        Self::with_config(TransformConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: TransformConfig) -> Self {
        Self {
            config,
            scorer: None,
        }
    }

    /// Set the scorer used in annotate mode.
    ///
    /// Remove mode never calls the scorer and works without one.
    pub fn with_scorer(mut self, scorer: impl Scorer + 'static) -> Self {
        self.scorer = Some(Arc::new(scorer));
        self
    }

    /// Share an existing scorer.
    pub fn with_shared_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    fn file_transform(&self) -> FileTransform<'_> {
        let scorer = self.scorer.as_deref().map(|s| s as &dyn Scorer);
        FileTransform::new(&self.config, scorer)
    }

    /// Rewrite one file in place, keeping a backup of the original.
    pub fn transform_file(&self, path: impl AsRef<Path>) -> Result<FileReport> {
        self.file_transform().run(path.as_ref())
    }

    /// Compute the rewritten text of one file without touching it.
    pub fn preview(&self, path: impl AsRef<Path>) -> Result<(String, FileReport)> {
        self.file_transform().preview(path.as_ref())
    }

    /// Rewrite one file, folding any error into the outcome.
    pub fn process(&self, path: impl AsRef<Path>) -> FileOutcome {
        let path = path.as_ref();
        match self.transform_file(path) {
            Ok(report) => FileOutcome::transformed(report),
            Err(err) => {
                if err.is_backup() {
                    warn!("skipping {}: {}", path.display(), err);
                }
                FileOutcome::from_error(path.to_path_buf(), &err)
            }
        }
    }

    /// Rewrite every file in order; a failing file does not stop the run.
    pub fn run<I, P>(&self, paths: I) -> BatchReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = BatchReport::default();
        for path in paths {
            report.push(self.process(path));
        }
        report
    }
}

impl Default for Blablatex {
    fn default() -> Self {
        Self::new()
    }
}
