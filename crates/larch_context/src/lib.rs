//! Per-document artifact cache with lazy, memoized, invalidation-cascading
//! computation.
//!
//! The central type is [`DocumentCache`]: one instance per tracked document,
//! deriving a chain of artifacts (content lines, tokens, syntax tree, symbol
//! tree, complexity data, metrics, diagnostic-ignore regions) on demand and
//! memoizing each under its [`CacheKey`]. Content replacement cascades
//! invalidation over every content-derived artifact, while
//! [`DocumentCache::release_heavy_data`] sheds the heavy token and tree data
//! of an inactive document but keeps its symbol skeleton queryable.
//!
//! The computation bodies live behind the traits in [`computer`]; this crate
//! only orchestrates and memoizes them.

#![warn(missing_docs)]

pub mod computer;
pub mod document;
pub mod error;
pub mod file_type;
pub mod ignorance;
pub mod key;
pub mod metadata;
pub mod metrics;

mod slot;

pub use computer::AnalyzerHost;
pub use document::{DocumentCache, DocumentView};
pub use error::CacheError;
pub use file_type::FileType;
pub use ignorance::{IgnoredRegions, LineSpan};
pub use key::CacheKey;
pub use metadata::{ConfigurationId, ModuleType, SupportVariant};
pub use metrics::Metrics;
