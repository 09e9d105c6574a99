//! Failure type for diagnostic rule evaluation.

use larch_context::CacheError;

/// A fault raised by one diagnostic rule during evaluation.
///
/// Rule faults are caught at the rule boundary by the pipeline: the rule
/// contributes zero findings for the run and the fault is logged with the
/// rule's code and the document identity.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A document artifact the rule depends on could not be computed.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The rule itself failed.
    #[error("{0}")]
    Failed(String),
}
