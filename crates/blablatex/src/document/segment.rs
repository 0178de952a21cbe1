//! Line classification and block segmentation.

use std::str::SplitInclusive;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

static BLANK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*$").unwrap());

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\\par\b").unwrap());

static BEGIN_ENVIRONMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\\begin\s*\{").unwrap());

static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\\(?:part|chapter|section|subsection|subsubsection)\*?\s*[\[{]").unwrap()
});

/// Directives that still count as content when they open a block.
static CONTENT_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\\(?:par|label)\b").unwrap());

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// What a single line means to the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// `\par`
    ParagraphBreak,
    /// `\begin{...}`
    BeginEnvironment,
    /// `\part`, `\chapter`, `\section`, `\subsection`, `\subsubsection`.
    Heading,
    /// Anything else.
    Text,
}

impl LineKind {
    /// Classify one line (with or without its terminator).
    pub fn classify(line: &str) -> Self {
        if BLANK.is_match(line) {
            LineKind::Blank
        } else if PARAGRAPH_BREAK.is_match(line) {
            LineKind::ParagraphBreak
        } else if BEGIN_ENVIRONMENT.is_match(line) {
            LineKind::BeginEnvironment
        } else if HEADING.is_match(line) {
            LineKind::Heading
        } else {
            LineKind::Text
        }
    }

    /// Whether this line opens a new block.
    pub fn starts_block(&self) -> bool {
        matches!(
            self,
            LineKind::Blank | LineKind::ParagraphBreak | LineKind::BeginEnvironment
        )
    }
}

/// What a block is, for annotation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Starts with a markup escape (`\`) or comment (`%`).
    Directive,
    /// Free text.
    Paragraph,
    /// Ends with a heading line.
    SectionBoundary,
}

impl BlockKind {
    /// Classify block text as directive or paragraph.
    ///
    /// `\par` and `\label` openers count as paragraph content.
    pub fn classify(text: &str) -> Self {
        let first = text.trim_start().chars().next();
        match first {
            Some('\\') | Some('%') if !CONTENT_DIRECTIVE.is_match(text) => BlockKind::Directive,
            _ => BlockKind::Paragraph,
        }
    }
}

// =============================================================================
// BLOCKS
// =============================================================================

/// A contiguous run of lines, terminators included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    /// Create a block, classifying its text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind: BlockKind::classify(&text),
            text,
        }
    }

    /// Create a block closed by a heading line.
    pub fn section_boundary(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::SectionBoundary,
            text: text.into(),
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the block holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Split into the text before the last line and the last line.
    ///
    /// For section boundaries this separates the body from the heading.
    pub fn split_last_line(&self) -> (&str, &str) {
        let without_terminator = self.text.strip_suffix('\n').unwrap_or(&self.text);
        let start = without_terminator.rfind('\n').map(|i| i + 1).unwrap_or(0);
        self.text.split_at(start)
    }
}

// =============================================================================
// SEGMENTER
// =============================================================================

/// Lazy iterator over the blocks of a document.
///
/// Concatenating every yielded block reproduces the input exactly.
pub struct Segmenter<'a> {
    lines: SplitInclusive<'a, char>,
    current: String,
}

impl<'a> Segmenter<'a> {
    /// Segment `text` into blocks.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split_inclusive('\n'),
            current: String::new(),
        }
    }
}

impl Iterator for Segmenter<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        for line in self.lines.by_ref() {
            let kind = LineKind::classify(line);

            if kind == LineKind::Heading {
                self.current.push_str(line);
                return Some(Block::section_boundary(std::mem::take(&mut self.current)));
            }

            if kind.starts_block() && !self.current.trim().is_empty() {
                let block = Block::new(std::mem::take(&mut self.current));
                self.current.push_str(line);
                return Some(block);
            }

            self.current.push_str(line);
        }

        if self.current.is_empty() {
            None
        } else {
            Some(Block::new(std::mem::take(&mut self.current)))
        }
    }
}

/// Segment a document into blocks.
pub fn segment(text: &str) -> Segmenter<'_> {
    Segmenter::new(text)
}
