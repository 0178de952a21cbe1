//! Fuzz target for marker removal.
//!
//! Removal never panics and never grows its input.

#![no_main]

use blablatex::{remove_markers, Remover};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let stripped = remove_markers(input);
        assert!(stripped.len() <= input.len());

        // Streaming and in-memory removal agree
        let mut out = Vec::new();
        Remover::new().strip(input.as_bytes(), &mut out).unwrap();
        assert_eq!(out, stripped.as_bytes());
    }
});
