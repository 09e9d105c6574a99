//! Trait boundaries for the external artifact computers.
//!
//! The cache orchestrates and memoizes; the computation bodies (tokenizer,
//! parser, symbol-tree builder, complexity analyzers, ignore-region scanner,
//! metadata lookup) live behind these traits. Computers receive a
//! [`DocumentView`] so they can pull the dependency artifacts they need
//! without re-entering the document's structural lock.

use crate::document::DocumentView;
use crate::error::CacheError;
use crate::ignorance::IgnoredRegions;
use crate::metadata::{ConfigurationId, ModuleType, SupportVariant};
use larch_source::DocumentUri;
use larch_syntax::{ComplexityData, SymbolTree, SyntaxError, SyntaxTree, TokenList, TokenizerRun};
use std::collections::HashMap;
use std::sync::Arc;

/// The external tokenizer and parser, both pure functions of content.
pub trait SyntaxProvider: Send + Sync {
    /// Tokenizes raw content into a [`TokenizerRun`].
    fn tokenize(&self, content: &str) -> Result<TokenizerRun, SyntaxError>;

    /// Parses a token stream into a [`SyntaxTree`].
    fn parse(&self, tokens: &TokenList) -> Result<SyntaxTree, SyntaxError>;
}

/// The external symbol-tree builder.
pub trait SymbolTreeBuilder: Send + Sync {
    /// Builds the document's symbol hierarchy.
    fn build(&self, document: &DocumentView<'_>) -> Result<SymbolTree, CacheError>;
}

/// An external complexity analyzer (cognitive or cyclomatic).
pub trait ComplexityAnalyzer: Send + Sync {
    /// Computes file-level and per-method complexity.
    fn compute(&self, document: &DocumentView<'_>) -> Result<ComplexityData, CacheError>;
}

/// The external scanner for comment-driven diagnostic-suppression regions.
pub trait IgnoranceScanner: Send + Sync {
    /// Scans comment tokens for suppression directives.
    fn scan(&self, document: &DocumentView<'_>) -> Result<IgnoredRegions, CacheError>;
}

/// The external metadata subsystem resolving identity-derived module facts.
///
/// Lookups are infallible: a document unknown to the metadata yields
/// [`ModuleType::Unknown`] and an empty support map.
pub trait MetadataProvider: Send + Sync {
    /// Resolves the module type of a document.
    fn module_type(&self, uri: &DocumentUri) -> ModuleType;

    /// Resolves the per-configuration support variants of a document.
    fn support_variants(&self, uri: &DocumentUri) -> HashMap<ConfigurationId, SupportVariant>;
}

/// The bundle of external computers shared by every document cache.
pub struct AnalyzerHost {
    /// Tokenizer and parser.
    pub syntax: Arc<dyn SyntaxProvider>,
    /// Symbol-tree builder.
    pub symbols: Arc<dyn SymbolTreeBuilder>,
    /// Cognitive complexity analyzer.
    pub cognitive: Arc<dyn ComplexityAnalyzer>,
    /// Cyclomatic complexity analyzer.
    pub cyclomatic: Arc<dyn ComplexityAnalyzer>,
    /// Ignore-region scanner.
    pub ignorance: Arc<dyn IgnoranceScanner>,
    /// Module metadata lookup.
    pub metadata: Arc<dyn MetadataProvider>,
}
