//! Scoring and wrapping of paragraph blocks.

use log::debug;

use crate::document::{
    line_ending, segment, start_marker, with_line_ending, Block, BlockKind, Severity, END_MARKER,
};
use crate::error::Result;
use crate::scorer::{Language, Scorer};

use super::requirements::add_requirements;

/// Blocks at or under this many characters are left alone.
pub const DEFAULT_MIN_PARAGRAPH_LEN: usize = 80;

/// Outcome of annotating one block.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotated {
    /// Text to write in place of the block.
    pub text: String,
    /// Score, when the block was sent to the scorer.
    pub score: Option<f64>,
}

impl Annotated {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            score: None,
        }
    }

    /// Severity tier of the score, if any.
    pub fn severity(&self) -> Option<Severity> {
        self.score.map(Severity::from_score)
    }
}

/// Wraps long paragraphs in score markers.
pub struct Annotator<'a> {
    scorer: &'a dyn Scorer,
    language: Language,
    min_paragraph_len: usize,
}

impl<'a> Annotator<'a> {
    /// Create an annotator scoring in `language`.
    pub fn new(scorer: &'a dyn Scorer, language: Language) -> Self {
        Self {
            scorer,
            language,
            min_paragraph_len: DEFAULT_MIN_PARAGRAPH_LEN,
        }
    }

    /// Override the paragraph length threshold.
    pub fn with_min_paragraph_len(mut self, len: usize) -> Self {
        self.min_paragraph_len = len;
        self
    }

    /// Annotate a single block.
    ///
    /// Directives get the requirement declarations, long paragraphs get
    /// scored and wrapped. A section boundary is handled through its body;
    /// the heading line always stays outside the markers.
    pub fn annotate_block(&self, block: &Block) -> Result<Annotated> {
        match block.kind {
            BlockKind::SectionBoundary => {
                let (body, heading) = block.split_last_line();
                let mut annotated = self.annotate_text(body)?;
                if !annotated.text.is_empty() && !annotated.text.ends_with('\n') {
                    annotated.text.push('\n');
                }
                annotated.text.push_str(heading);
                Ok(annotated)
            }
            BlockKind::Directive | BlockKind::Paragraph => self.annotate_text(&block.text),
        }
    }

    fn annotate_text(&self, text: &str) -> Result<Annotated> {
        match BlockKind::classify(text) {
            BlockKind::Directive => Ok(Annotated {
                text: add_requirements(text),
                score: None,
            }),
            _ if text.chars().count() > self.min_paragraph_len => {
                let score = self.scorer.score(text, self.language)?;
                debug!(
                    "scored {} chars at {:.2} ({})",
                    text.len(),
                    score,
                    Severity::from_score(score)
                );
                Ok(Annotated {
                    text: wrap(text, score),
                    score: Some(score),
                })
            }
            _ => Ok(Annotated::unchanged(text)),
        }
    }

    /// Annotate a whole document in memory.
    pub fn annotate_str(&self, document: &str) -> Result<String> {
        let mut out = String::with_capacity(document.len());
        for block in segment(document) {
            out.push_str(&self.annotate_block(&block)?.text);
        }
        Ok(out)
    }
}

/// Surround `text` with a start marker for `score` and the end marker.
///
/// Marker lines use the terminator of the first line of `text`.
pub fn wrap(text: &str, score: f64) -> String {
    let eol = text.split_inclusive('\n').next().map_or("\n", line_ending);
    let mut out = with_line_ending(&start_marker(score), eol).into_owned();
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push_str(eol);
    }
    out.push_str(&with_line_ending(END_MARKER, eol));
    out
}
