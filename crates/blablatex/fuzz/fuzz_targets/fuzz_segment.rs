//! Fuzz target for the block segmenter.
//!
//! Checks that segmentation:
//! 1. Never panics on any input
//! 2. Reproduces the input when the blocks are joined
//! 3. Never yields an empty block

#![no_main]

use blablatex::{segment, Annotator, Language, MockScorer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    let mut joined = String::with_capacity(input.len());
    for block in segment(&input) {
        assert!(!block.is_empty());
        let _ = block.split_last_line();
        joined.push_str(&block.text);
    }
    assert_eq!(joined, input);

    // Annotation with a mock scorer must not panic either
    let scorer = MockScorer::new(0.5);
    let _ = Annotator::new(&scorer, Language::En).annotate_str(&input);
});
