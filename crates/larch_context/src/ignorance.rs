//! Diagnostic-suppression regions parsed from comment directives.

use larch_diagnostics::{Finding, RuleCode};
use std::collections::HashMap;

/// An inclusive span of zero-based lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LineSpan {
    /// First suppressed line.
    pub start: u32,
    /// Last suppressed line.
    pub end: u32,
}

impl LineSpan {
    /// Creates a span covering `start..=end`.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Creates a span covering a single line.
    pub fn line(line: u32) -> Self {
        Self::new(line, line)
    }

    /// Returns `true` if the span covers the given line.
    pub fn contains(self, line: u32) -> bool {
        self.start <= line && line <= self.end
    }
}

/// The suppression regions of one document content version.
///
/// Built by the external ignore-region scanner from comment tokens. A region
/// either suppresses every rule (`all`) or one specific rule (`by_code`).
/// A finding is matched by the line its range starts on.
#[derive(Clone, Debug, Default)]
pub struct IgnoredRegions {
    all: Vec<LineSpan>,
    by_code: HashMap<RuleCode, Vec<LineSpan>>,
}

impl IgnoredRegions {
    /// Creates suppression regions from blanket and per-rule spans.
    pub fn new(all: Vec<LineSpan>, by_code: HashMap<RuleCode, Vec<LineSpan>>) -> Self {
        Self { all, by_code }
    }

    /// Returns `true` if no region is recorded at all.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.by_code.is_empty()
    }

    /// Returns `true` if the finding falls inside a region that suppresses
    /// it, either blanket or rule-specific.
    pub fn is_ignored(&self, finding: &Finding) -> bool {
        let line = finding.range.start.line;
        if self.all.iter().any(|span| span.contains(line)) {
            return true;
        }
        self.by_code
            .get(&finding.code)
            .is_some_and(|spans| spans.iter().any(|span| span.contains(line)))
    }
}
