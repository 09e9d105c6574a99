//! Document identity, positions, and line-based text access.
//!
//! This crate provides the [`DocumentUri`] identity type, zero-based
//! [`Position`]/[`Range`] coordinates, and the [`text_range`] resolver that
//! maps a line/column interval over a line-indexed document to a substring.

#![warn(missing_docs)]

pub mod lines;
pub mod position;
pub mod uri;

pub use lines::{split_lines, text_range, RangeError};
pub use position::{Position, Range};
pub use uri::DocumentUri;
