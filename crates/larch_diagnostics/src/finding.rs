//! A single diagnostic finding at one source location.

use crate::code::RuleCode;
use crate::severity::Severity;
use larch_source::Range;
use serde::{Deserialize, Serialize};

/// One diagnostic result produced by one rule at one location.
///
/// Findings derive `Eq` and `Hash` so the pipeline can drop exact duplicates
/// reported by overlapping rules. The `source` field names the producing
/// analyzer and is stamped by the pipeline before publishing.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Finding {
    /// The rule that produced this finding.
    pub code: RuleCode,
    /// The severity of the finding.
    pub severity: Severity,
    /// The human-readable message.
    pub message: String,
    /// The source range the finding applies to.
    pub range: Range,
    /// The name of the producing analyzer.
    pub source: String,
}

impl Finding {
    /// Creates a new finding with an empty `source`.
    pub fn new(code: RuleCode, severity: Severity, message: impl Into<String>, range: Range) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            range,
            source: String::new(),
        }
    }

    /// Creates an error-severity finding.
    pub fn error(code: RuleCode, message: impl Into<String>, range: Range) -> Self {
        Self::new(code, Severity::Error, message, range)
    }

    /// Creates a warning-severity finding.
    pub fn warning(code: RuleCode, message: impl Into<String>, range: Range) -> Self {
        Self::new(code, Severity::Warning, message, range)
    }

    /// Sets the producing analyzer's name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}
