//! Immutable size and complexity metrics of one content version.

use serde::{Deserialize, Serialize};

/// A metrics snapshot of one document content version.
///
/// Computed once per version from the token list, syntax tree, symbol tree,
/// and the two complexity artifacts; cached under
/// [`CacheKey::Metrics`](crate::CacheKey::Metrics). All line numbers in the
/// data vectors are one-based, sorted, and deduplicated.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of methods declaring a return value.
    pub functions: usize,
    /// Number of methods without a return value.
    pub procedures: usize,
    /// Number of distinct lines bearing default-channel tokens.
    pub ncloc: usize,
    /// The distinct lines bearing default-channel tokens.
    pub ncloc_data: Vec<u32>,
    /// The distinct start lines of coverable syntax nodes.
    pub covloc_data: Vec<u32>,
    /// Total line count, taken from the last token; zero without tokens.
    pub lines: u32,
    /// Number of distinct comment-bearing lines.
    pub comments: usize,
    /// Number of statement nodes.
    pub statements: usize,
    /// The file's cognitive complexity total.
    pub cognitive_complexity: u32,
    /// The file's cyclomatic complexity total.
    pub cyclomatic_complexity: u32,
}
