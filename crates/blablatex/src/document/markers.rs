//! Marker text and severity tiers.
//!
//! Everything blablatex writes into a document is fenced by
//! [`FENCE_OPEN`] and [`FENCE_CLOSE`] lines so it can be stripped again
//! without touching the author's text.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opens a generated fragment.
pub const FENCE_OPEN: &str = "%blablatex";

/// Closes a generated fragment.
pub const FENCE_CLOSE: &str = "%/blablatex";

/// Closes a `blabla` environment.
pub const END_MARKER: &str = "%blablatex\n\\end{blabla}\n%/blablatex\n";

/// Packages needed by the `blabla` environment, inserted after `\documentclass`.
pub const PACKAGES: &str = r"%blablatex
\usepackage{framed}
\usepackage{xcolor}
%/blablatex
";

/// Definition of the `blabla` environment, inserted after `\begin{document}`.
pub const ENVIRONMENT: &str = r"%blablatex
\newenvironment{blabla}[2]
{%
    \def\FrameCommand
    {%
        {\color{#2}%
        \parbox{2.5em}{BS:\\ $#1$}%
        \vrule width 3pt}%
        \hspace{3pt}
    }%
    \MakeFramed{\advance\hsize-\width}%
}
{\endMakeFramed}
%/blablatex
";

/// Open a `blabla` environment showing `score` in the color of its tier.
pub fn start_marker(score: f64) -> String {
    format!(
        "{}\n\\begin{{blabla}}{{{:.2}}}{{{}}}\n{}\n",
        FENCE_OPEN,
        score,
        Severity::from_score(score).color(),
        FENCE_CLOSE
    )
}

/// Terminator of `line`: `"\r\n"` for CRLF lines, `"\n"` otherwise.
pub fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") { "\r\n" } else { "\n" }
}

/// `fragment` with its line terminators rewritten to `eol`.
pub fn with_line_ending<'a>(fragment: &'a str, eol: &str) -> Cow<'a, str> {
    if eol == "\n" {
        Cow::Borrowed(fragment)
    } else {
        Cow::Owned(fragment.replace('\n', eol))
    }
}

/// Severity tier of a bullshit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// [0, 0.2)
    Low,
    /// [0.2, 0.4)
    Medium,
    /// [0.4, 0.6)
    High,
    /// [0.6, inf)
    VeryHigh,
    /// Negative or NaN; the service should never send these.
    Unrated,
}

impl Severity {
    /// Bucket a score into its tier.
    pub fn from_score(score: f64) -> Self {
        if (0.0..0.2).contains(&score) {
            Severity::Low
        } else if (0.2..0.4).contains(&score) {
            Severity::Medium
        } else if (0.4..0.6).contains(&score) {
            Severity::High
        } else if score >= 0.6 {
            Severity::VeryHigh
        } else {
            Severity::Unrated
        }
    }

    /// xcolor name used for the frame.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Low => "green",
            Severity::Medium => "olive",
            Severity::High => "orange",
            Severity::VeryHigh => "red",
            Severity::Unrated => "black",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::VeryHigh => "very high",
            Severity::Unrated => "unrated",
        };
        f.write_str(label)
    }
}
