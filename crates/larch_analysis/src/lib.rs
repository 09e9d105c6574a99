//! The parallel diagnostic-computation pipeline.
//!
//! [`DiagnosticPipeline`] runs a set of [`DiagnosticRule`] instances against
//! one document's cached artifacts, fanning the rules out across threads.
//! Failure isolation is the defining property: a faulting rule contributes
//! zero findings and is logged, never aborting the run or suppressing the
//! findings of other rules. Surviving findings are filtered against the
//! document's suppression regions, deduplicated, and stored wholesale per
//! document identity.

#![warn(missing_docs)]

pub mod error;
pub mod pipeline;
pub mod rule;

pub use error::RuleError;
pub use pipeline::DiagnosticPipeline;
pub use rule::DiagnosticRule;
