//! Line splitting and line/column range resolution.

use crate::position::{Position, Range};

/// Errors produced by [`text_range`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// A line index referenced by the range does not exist in the document.
    #[error("range goes beyond the document: line {line} is outside 0..{line_count}")]
    LineOutOfBounds {
        /// The offending zero-based line index.
        line: u32,
        /// The number of lines in the document.
        line_count: usize,
    },

    /// A character offset referenced by the range is past the end of its line.
    #[error("column {character} is past the end of line {line} ({len} characters)")]
    ColumnOutOfBounds {
        /// The zero-based line index of the offending column.
        line: u32,
        /// The offending zero-based character offset.
        character: u32,
        /// The number of characters in the line.
        len: usize,
    },

    /// The range's end position precedes its start position.
    #[error("range end {end:?} precedes start {start:?}")]
    Backwards {
        /// The range start.
        start: Position,
        /// The range end.
        end: Position,
    },
}

/// Splits document content into lines on `\n`, keeping the trailing empty
/// fragment so that a document ending in a newline has a final empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_owned).collect()
}

/// Resolves a half-open line/column [`Range`] over line-indexed text to the
/// exact substring it covers.
///
/// Same-line ranges return a single fragment. Multi-line ranges join the
/// start line's suffix, every full line strictly between, and the end line's
/// prefix with `\n`. Both line indexes and character offsets are validated;
/// character offsets count characters, not bytes.
pub fn text_range(lines: &[String], range: Range) -> Result<String, RangeError> {
    let Range { start, end } = range;

    for line in [start.line, end.line] {
        if line as usize >= lines.len() {
            return Err(RangeError::LineOutOfBounds {
                line,
                line_count: lines.len(),
            });
        }
    }
    if end < start {
        return Err(RangeError::Backwards { start, end });
    }

    if start.line == end.line {
        let line = &lines[start.line as usize];
        let from = byte_of_char(line, start.character)
            .ok_or_else(|| column_error(start.line, start.character, line))?;
        let to = byte_of_char(line, end.character)
            .ok_or_else(|| column_error(end.line, end.character, line))?;
        return Ok(line[from..to].to_owned());
    }

    let mut fragments = Vec::with_capacity((end.line - start.line + 1) as usize);
    for idx in start.line..=end.line {
        let line = &lines[idx as usize];
        let fragment = if idx == start.line {
            let from = byte_of_char(line, start.character)
                .ok_or_else(|| column_error(idx, start.character, line))?;
            &line[from..]
        } else if idx == end.line {
            let to = byte_of_char(line, end.character)
                .ok_or_else(|| column_error(idx, end.character, line))?;
            &line[..to]
        } else {
            line.as_str()
        };
        fragments.push(fragment);
    }
    Ok(fragments.join("\n"))
}

/// Maps a character offset within a line to its byte offset.
///
/// An offset equal to the line's character count maps to the line's byte
/// length; anything past that returns `None`.
fn byte_of_char(line: &str, character: u32) -> Option<usize> {
    let mut idx = 0u32;
    for (byte, _) in line.char_indices() {
        if idx == character {
            return Some(byte);
        }
        idx += 1;
    }
    if idx == character {
        Some(line.len())
    } else {
        None
    }
}

fn column_error(line: u32, character: u32, text: &str) -> RangeError {
    RangeError::ColumnOutOfBounds {
        line,
        character,
        len: text.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn split_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn same_line_prefix() {
        let content = lines(&["DemoString with some text"]);
        let text = text_range(&content, Range::of(0, 0, 0, 4)).unwrap();
        assert_eq!(text, "Demo");
    }

    #[test]
    fn multi_line_join() {
        let content = lines(&["line first", "second line"]);
        let text = text_range(&content, Range::of(0, 5, 1, 6)).unwrap();
        assert_eq!(text, "first\nsecond");
    }

    #[test]
    fn interior_lines_contribute_in_full() {
        let content = lines(&["one", "two", "three"]);
        let text = text_range(&content, Range::of(0, 1, 2, 2)).unwrap();
        assert_eq!(text, "ne\ntwo\nth");
    }

    #[test]
    fn line_out_of_bounds() {
        let content = lines(&["only line"]);
        let err = text_range(&content, Range::of(0, 0, 1, 0)).unwrap_err();
        assert_eq!(
            err,
            RangeError::LineOutOfBounds {
                line: 1,
                line_count: 1,
            }
        );
    }

    #[test]
    fn column_out_of_bounds() {
        let content = lines(&["short"]);
        let err = text_range(&content, Range::of(0, 0, 0, 6)).unwrap_err();
        assert_eq!(
            err,
            RangeError::ColumnOutOfBounds {
                line: 0,
                character: 6,
                len: 5,
            }
        );
    }

    #[test]
    fn column_at_line_end_is_valid() {
        let content = lines(&["abc"]);
        let text = text_range(&content, Range::of(0, 1, 0, 3)).unwrap();
        assert_eq!(text, "bc");
    }

    #[test]
    fn backwards_range_rejected() {
        let content = lines(&["abc", "def"]);
        let err = text_range(&content, Range::of(1, 0, 0, 2)).unwrap_err();
        assert!(matches!(err, RangeError::Backwards { .. }));
    }

    #[test]
    fn character_offsets_count_chars_not_bytes() {
        let content = lines(&["день first"]);
        let text = text_range(&content, Range::of(0, 0, 0, 4)).unwrap();
        assert_eq!(text, "день");
    }
}
