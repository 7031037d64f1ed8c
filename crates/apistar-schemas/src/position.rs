//! Best-effort mapping from document paths to source positions
//!
//! Semantic validation reports where in the logical document tree a
//! message applies, not where in the raw text. The locator scans the
//! original source for the path's keys in order and converts the byte
//! offset it lands on into a line/column pair. The mapping is heuristic:
//! an unresolvable segment stops the scan at the last resolved ancestor,
//! and the fallback is the start of the document.
//!
//! Copyright (c) 2025 API Star Team
//! Licensed under the Apache-2.0 license

use crate::diagnostics::{PathIndex, PathSegment, Position};
use crate::format::BaseFormat;

/// Locates document paths in the original source text.
pub struct SourceLocator<'a> {
    text: &'a str,
    format: BaseFormat,
}

impl<'a> SourceLocator<'a> {
    pub fn new(text: &'a str, format: BaseFormat) -> Self {
        Self { text, format }
    }

    /// Map a path to a position. Total: never fails, worst case is the
    /// start of the document.
    pub fn locate(&self, index: &PathIndex) -> Position {
        let mut offset = 0usize;
        for segment in index.segments() {
            let key = match segment {
                PathSegment::Key(key) => key,
                // Array positions are not scanned for; the enclosing
                // key's position is the anchor.
                PathSegment::Index(_) => continue,
            };
            match self.find_key(key, offset) {
                Some(found) => offset = found,
                None => break,
            }
        }
        position_at(self.text, offset)
    }

    fn find_key(&self, key: &str, from: usize) -> Option<usize> {
        let needle = match self.format {
            BaseFormat::Json => format!("\"{}\"", key),
            BaseFormat::Yaml => format!("{}:", key),
        };
        self.text
            .get(from..)
            .and_then(|rest| rest.find(&needle))
            .map(|found| from + found)
    }
}

/// Convert a byte offset into a 1-based line/column pair, clamping
/// offsets past the end of the text.
fn position_at(text: &str, offset: usize) -> Position {
    let mut clamped = offset.min(text.len());
    while clamped > 0 && !text.is_char_boundary(clamped) {
        clamped -= 1;
    }
    let mut line_no = 1;
    let mut column_no = 1;
    for ch in text[..clamped].chars() {
        if ch == '\n' {
            line_no += 1;
            column_no = 1;
        } else {
            column_no += 1;
        }
    }
    Position::new(line_no, column_no)
}
