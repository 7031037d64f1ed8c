//! Positioned diagnostic types produced by a failed validation attempt
//!
//! Copyright (c) 2025 API Star Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based location in the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line_no: usize,
    pub column_no: usize,
}

impl Position {
    pub fn new(line_no: usize, column_no: usize) -> Self {
        Self {
            line_no: line_no.max(1),
            column_no: column_no.max(1),
        }
    }

    /// Start of the document, used when nothing better is known.
    pub fn start() -> Self {
        Self {
            line_no: 1,
            column_no: 1,
        }
    }
}

/// One step from the document root: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// The ordered steps from the document root to the location a message
/// concerns. An empty index denotes the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathIndex(Vec<PathSegment>);

impl PathIndex {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    /// Parse a JSON Pointer (RFC 6901), e.g. `/paths/~1pets/get`.
    ///
    /// All-digit reference tokens are treated as array indices; keys that
    /// happen to be numeric are indistinguishable at the pointer level.
    pub fn from_json_pointer(pointer: &str) -> Self {
        let mut segments = Vec::new();
        for token in pointer.split('/').skip(1) {
            if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(index) = token.parse::<usize>() {
                    segments.push(PathSegment::Index(index));
                    continue;
                }
            }
            let key = token.replace("~1", "/").replace("~0", "~");
            segments.push(PathSegment::Key(key));
        }
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    /// The same index with its last segment dropped. The root's parent is
    /// the root.
    pub fn parent(&self) -> Self {
        let mut segments = self.0.clone();
        segments.pop();
        Self(segments)
    }
}

impl fmt::Display for PathIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if position > 0 => write!(f, ".{}", key)?,
                _ => write!(f, "{}", segment)?,
            }
        }
        Ok(())
    }
}

/// A single validator message with its category tag, source position, and
/// document path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub code: String,
    pub position: Position,
    pub index: PathIndex,
}

impl Message {
    pub fn new(
        text: impl Into<String>,
        code: impl Into<String>,
        position: Position,
        index: PathIndex,
    ) -> Self {
        Self {
            text: text.into(),
            code: code.into(),
            position,
            index,
        }
    }
}

/// The complete report of one failed validation attempt: an ordered
/// sequence of messages plus a one-line summary. Never mutated after it
/// is produced, only read and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub messages: Vec<Message>,
    pub summary: String,
}

impl Diagnostic {
    pub fn new(messages: Vec<Message>, summary: impl Into<String>) -> Self {
        Self {
            messages,
            summary: summary.into(),
        }
    }
}
