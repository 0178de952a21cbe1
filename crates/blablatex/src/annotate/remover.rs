//! Streaming removal of generated fragments.
//!
//! Works line by line without any block structure. Fences are matched by
//! prefix, so nesting and unbalanced fences are not detected: a missing
//! close fence swallows the rest of the document.

use std::io::{self, BufRead, Write};

use crate::document::{FENCE_CLOSE, FENCE_OPEN};

/// Where the remover is relative to a fenced fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegionState {
    #[default]
    Outside,
    Inside,
}

impl RegionState {
    /// Advance on `line`, returning the next state and whether to keep the line.
    ///
    /// | state   | line          | next    | keep |
    /// |---------|---------------|---------|------|
    /// | Outside | open fence    | Inside  | no   |
    /// | Outside | anything else | Outside | yes  |
    /// | Inside  | close fence   | Outside | no   |
    /// | Inside  | anything else | Inside  | no   |
    pub fn step(self, line: &str) -> (RegionState, bool) {
        match self {
            RegionState::Outside if line.starts_with(FENCE_OPEN) => (RegionState::Inside, false),
            RegionState::Outside => (RegionState::Outside, true),
            RegionState::Inside if line.starts_with(FENCE_CLOSE) => (RegionState::Outside, false),
            RegionState::Inside => (RegionState::Inside, false),
        }
    }
}

/// Line filter dropping everything between fences, fences included.
#[derive(Debug, Default)]
pub struct Remover {
    state: RegionState,
    suppressed: usize,
}

impl Remover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> RegionState {
        self.state
    }

    /// Number of lines dropped so far.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Feed one line; returns it back if it should be kept.
    pub fn feed<'l>(&mut self, line: &'l str) -> Option<&'l str> {
        let (next, keep) = self.state.step(line);
        self.state = next;
        if keep {
            Some(line)
        } else {
            self.suppressed += 1;
            None
        }
    }

    /// Filter an in-memory document.
    pub fn strip_str(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for line in text.split_inclusive('\n') {
            if let Some(kept) = self.feed(line) {
                out.push_str(kept);
            }
        }
        out
    }

    /// Filter `reader` into `writer`, returning the number of lines kept.
    pub fn strip<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> io::Result<usize> {
        let mut line = String::new();
        let mut kept = 0;

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            if let Some(text) = self.feed(&line) {
                writer.write_all(text.as_bytes())?;
                kept += 1;
            }
        }

        writer.flush()?;
        Ok(kept)
    }
}

/// Remove every fenced fragment from `text`.
pub fn remove_markers(text: &str) -> String {
    Remover::new().strip_str(text)
}
