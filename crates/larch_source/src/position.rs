//! Zero-based line/character coordinates within a document.

use serde::{Deserialize, Serialize};

/// A zero-based position within a document.
///
/// The `character` offset counts characters, not bytes, so positions remain
/// meaningful in documents containing multi-byte text. The derived ordering
/// compares by line first, then by character.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line index.
    pub line: u32,
    /// Zero-based character offset within the line.
    pub character: u32,
}

impl Position {
    /// Creates a new position.
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A half-open interval between two [`Position`]s.
///
/// The `start` position is included; the `end` position is excluded.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Range {
    /// The first position covered by the range (inclusive).
    pub start: Position,
    /// The position just past the range (exclusive).
    pub end: Position,
}

impl Range {
    /// Creates a new range between two positions.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a range from raw line/character quadruples.
    pub fn of(start_line: u32, start_character: u32, end_line: u32, end_character: u32) -> Self {
        Self {
            start: Position::new(start_line, start_character),
            end: Position::new(end_line, end_character),
        }
    }

    /// Returns `true` if the given line index falls between the range's
    /// start and end lines (both inclusive).
    pub fn contains_line(&self, line: u32) -> bool {
        self.start.line <= line && line <= self.end.line
    }
}
