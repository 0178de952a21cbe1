//! Document segmentation and the marker vocabulary.

mod markers;
mod segment;

pub use markers::{
    line_ending, start_marker, with_line_ending, Severity, END_MARKER, ENVIRONMENT, FENCE_CLOSE,
    FENCE_OPEN, PACKAGES,
};
pub use segment::{segment, Block, BlockKind, LineKind, Segmenter};
