//! Blablatex: annotate LaTeX paragraphs with their bullshit index.
//!
//! Each paragraph long enough to matter is sent to the BlaBlaMeter and
//! wrapped in a colored frame showing its score. The markers are fenced
//! with `%blablatex` comments so a second pass can remove them again.
//!
//! # Core Principles
//!
//! - **Backup first**: `paper.tex` is renamed to `paper.tex.org` before it
//!   is rewritten, and an existing backup is never overwritten
//! - **Reversible**: everything added is fenced and can be stripped
//! - **Lossless segmentation**: the blocks of a document concatenate back
//!   to the document
//!
//! # Example
//!
//! ```no_run
//! use blablatex::{Blablatex, BlablameterScorer, Language, TransformConfig};
//!
//! let config = TransformConfig {
//!     language: Language::De,
//!     ..Default::default()
//! };
//! let blablatex = Blablatex::with_config(config)
//!     .with_scorer(BlablameterScorer::new().unwrap());
//!
//! let report = blablatex.transform_file("paper.tex").unwrap();
//! println!("Scored {} of {} blocks", report.scored, report.blocks);
//! ```

pub mod annotate;
pub mod document;
pub mod error;
pub mod scorer;
pub mod transform;

mod blablatex;

pub use crate::blablatex::Blablatex;
pub use annotate::{add_requirements, remove_markers, Annotated, Annotator, Remover};
pub use document::{segment, Block, BlockKind, LineKind, Segmenter, Severity};
pub use error::{BlablaError, Result};
pub use scorer::{BlablameterScorer, Language, MockScorer, Scorer, ScorerConfig};
pub use transform::{
    BatchReport, FileOutcome, FileReport, FileTransform, Mode, OutcomeStatus, TransformConfig,
};
