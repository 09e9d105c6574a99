//! Diagnostic finding types shared between the analysis pipeline and the
//! result-publishing layer.
//!
//! This crate defines the [`Finding`] value type with its [`Severity`] level
//! and [`RuleCode`] identifier. It deliberately knows nothing about documents
//! or caches so that both sides of the pipeline can depend on it.

#![warn(missing_docs)]

pub mod code;
pub mod finding;
pub mod severity;

pub use code::RuleCode;
pub use finding::Finding;
pub use severity::Severity;
