//! File transforms: backup, rewrite, report.
//!
//! For an input `F` the original is renamed to `F.org` and the
//! transformed text is written to `F`. An existing `F.org` is never
//! overwritten.

mod backup;
mod driver;
mod report;

pub use backup::{backup_path, Backup, DEFAULT_BACKUP_SUFFIX};
pub use driver::{FileTransform, Mode, TransformConfig};
pub use report::{BatchReport, FileOutcome, FileReport, OutcomeStatus, SeverityCounts};
