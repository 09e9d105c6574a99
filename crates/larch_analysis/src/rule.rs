//! The diagnostic rule boundary.

use crate::error::RuleError;
use larch_context::DocumentCache;
use larch_diagnostics::{Finding, RuleCode};

/// One diagnostic rule evaluated by the pipeline.
///
/// Implementations pull whatever artifacts they need from the document
/// cache; the cache's per-key memoization means concurrent rules reading the
/// same artifact never duplicate work. A rule signals a fault by returning
/// an error (or panicking); the pipeline isolates either outcome.
pub trait DiagnosticRule: Send + Sync {
    /// Returns the rule's identifier, e.g. `"unused-variable"`.
    fn code(&self) -> RuleCode;

    /// Evaluates the rule against one document.
    fn check(&self, document: &DocumentCache) -> Result<Vec<Finding>, RuleError>;
}
