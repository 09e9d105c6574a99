//! File types resolved from a document's extension.

use serde::{Deserialize, Serialize};

/// The type of a tracked source file.
///
/// Resolved once per document from the identity's extension; the content is
/// never consulted, so the value survives content replacement.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FileType {
    /// A regular module source file (`.lar`).
    Source,
    /// A standalone script (`.lsc`).
    Script,
}

impl FileType {
    /// Resolves a file type from a lowercase-insensitive extension.
    ///
    /// Unknown or absent extensions default to [`FileType::Source`].
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some(ext) if ext.eq_ignore_ascii_case("lsc") => FileType::Script,
            _ => FileType::Source,
        }
    }
}
