//! Insertion of the declarations the `blabla` environment depends on.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::{line_ending, with_line_ending, ENVIRONMENT, PACKAGES};

static DOCUMENT_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\documentclass.+").unwrap());

static BEGIN_DOCUMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\begin\{document.+").unwrap());

/// Insert the package and environment declarations after their anchors.
///
/// Packages go right after a `\documentclass` line, the environment
/// definition right after `\begin{document}`. There is no check for an
/// earlier insertion: running this twice on the same text inserts twice.
/// Inserted lines end the way the anchor line does.
pub fn add_requirements(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        out.push_str(line);

        let insert = if DOCUMENT_CLASS.is_match(line) {
            Some(PACKAGES)
        } else if BEGIN_DOCUMENT.is_match(line) {
            Some(ENVIRONMENT)
        } else {
            None
        };

        if let Some(declarations) = insert {
            let eol = line_ending(line);
            if !line.ends_with('\n') {
                out.push_str(eol);
            }
            out.push_str(&with_line_ending(declarations, eol));
        }
    }

    out
}
