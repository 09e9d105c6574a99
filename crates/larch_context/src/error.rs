//! Error types for document cache operations.

use larch_source::RangeError;
use larch_syntax::SyntaxError;

/// Errors raised while computing or accessing document artifacts.
///
/// Computation failures are never cached: a failed artifact propagates to
/// the requesting caller and the next access retries from scratch.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Raw content was requested after [`release_heavy_data`]
    /// (crate::DocumentCache::release_heavy_data) dropped it.
    #[error("document content has been released; replace it before requesting content-derived artifacts")]
    ContentReleased,

    /// The external tokenizer or parser failed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A requested text range does not fit the document.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// An external computer failed to produce its artifact.
    #[error("{computer} computation failed: {message}")]
    Compute {
        /// The name of the failing computer.
        computer: &'static str,
        /// Description of the failure.
        message: String,
    },
}
