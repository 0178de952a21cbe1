//! Adding and removing score annotations.
//!
//! Annotation works block by block on the output of the segmenter;
//! removal is a plain line filter and never looks at blocks.

mod annotator;
mod remover;
mod requirements;

pub use annotator::{wrap, Annotated, Annotator, DEFAULT_MIN_PARAGRAPH_LEN};
pub use remover::{remove_markers, RegionState, Remover};
pub use requirements::add_requirements;
