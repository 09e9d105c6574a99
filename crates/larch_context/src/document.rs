//! The per-document artifact cache.

use crate::computer::AnalyzerHost;
use crate::error::CacheError;
use crate::file_type::FileType;
use crate::ignorance::IgnoredRegions;
use crate::key::CacheKey;
use crate::metadata::{ConfigurationId, ModuleType, SupportVariant};
use crate::metrics::Metrics;
use crate::slot::Slot;
use larch_source::{split_lines, text_range, DocumentUri, Range};
use larch_syntax::{
    ComplexityData, NodeKind, SymbolTree, SyntaxTree, Token, TokenList, TokenizerRun,
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// One typed memoizing cell per artifact kind.
#[derive(Default)]
struct Slots {
    tokenizer: Slot<TokenizerRun>,
    content_lines: Slot<Vec<String>>,
    token_list: Slot<TokenList>,
    syntax_tree: Slot<SyntaxTree>,
    symbol_tree: Slot<SymbolTree>,
    metrics: Slot<Metrics>,
    file_type: Slot<FileType>,
    cognitive: Slot<ComplexityData>,
    cyclomatic: Slot<ComplexityData>,
    ignorance: Slot<IgnoredRegions>,
    module_type: Slot<ModuleType>,
    support_variants: Slot<HashMap<ConfigurationId, SupportVariant>>,
}

impl Slots {
    fn invalidate(&self, key: CacheKey) {
        match key {
            CacheKey::Tokenizer => self.tokenizer.invalidate(),
            CacheKey::ContentLines => self.content_lines.invalidate(),
            CacheKey::SyntaxTree => self.syntax_tree.invalidate(),
            CacheKey::SymbolTree => self.symbol_tree.invalidate(),
            CacheKey::TokenList => self.token_list.invalidate(),
            CacheKey::Metrics => self.metrics.invalidate(),
            CacheKey::FileType => self.file_type.invalidate(),
            CacheKey::CognitiveComplexity => self.cognitive.invalidate(),
            CacheKey::CyclomaticComplexity => self.cyclomatic.invalidate(),
            CacheKey::DiagnosticIgnorance => self.ignorance.invalidate(),
            CacheKey::ModuleType => self.module_type.invalidate(),
            CacheKey::SupportVariants => self.support_variants.invalidate(),
        }
    }

    fn is_cached(&self, key: CacheKey) -> bool {
        match key {
            CacheKey::Tokenizer => self.tokenizer.is_cached(),
            CacheKey::ContentLines => self.content_lines.is_cached(),
            CacheKey::SyntaxTree => self.syntax_tree.is_cached(),
            CacheKey::SymbolTree => self.symbol_tree.is_cached(),
            CacheKey::TokenList => self.token_list.is_cached(),
            CacheKey::Metrics => self.metrics.is_cached(),
            CacheKey::FileType => self.file_type.is_cached(),
            CacheKey::CognitiveComplexity => self.cognitive.is_cached(),
            CacheKey::CyclomaticComplexity => self.cyclomatic.is_cached(),
            CacheKey::DiagnosticIgnorance => self.ignorance.is_cached(),
            CacheKey::ModuleType => self.module_type.is_cached(),
            CacheKey::SupportVariants => self.support_variants.is_cached(),
        }
    }
}

struct DocumentState {
    content: Option<Arc<str>>,
    slots: Slots,
}

/// The per-document incremental artifact cache.
///
/// One instance exists per tracked document, owned by the document registry.
/// Artifacts are derived lazily and memoized under their [`CacheKey`];
/// requesting an artifact computes its transitive dependencies first, each
/// cached independently. Artifact getters take the document's structural
/// lock shared, so unrelated artifacts compute in parallel while
/// [`replace_content`](Self::replace_content) and
/// [`release_heavy_data`](Self::release_heavy_data) are mutually exclusive
/// with each other and with every in-flight computation.
pub struct DocumentCache {
    uri: DocumentUri,
    host: Arc<AnalyzerHost>,
    state: RwLock<DocumentState>,
}

impl DocumentCache {
    /// Creates a cache for a newly tracked document with its initial content.
    pub fn new(uri: DocumentUri, content: impl Into<Arc<str>>, host: Arc<AnalyzerHost>) -> Self {
        Self {
            uri,
            host,
            state: RwLock::new(DocumentState {
                content: Some(content.into()),
                slots: Slots::default(),
            }),
        }
    }

    /// Returns the document's identity.
    pub fn uri(&self) -> &DocumentUri {
        &self.uri
    }

    fn view<'a>(&'a self, state: &'a DocumentState) -> DocumentView<'a> {
        DocumentView {
            uri: &self.uri,
            host: &self.host,
            state,
        }
    }

    /// Returns the raw document content.
    ///
    /// Fails with [`CacheError::ContentReleased`] after
    /// [`release_heavy_data`](Self::release_heavy_data) until new content is
    /// supplied.
    pub fn content(&self) -> Result<Arc<str>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).content()
    }

    /// Returns the content split into lines.
    pub fn content_lines(&self) -> Result<Arc<Vec<String>>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).content_lines()
    }

    /// Resolves a line/column range to the substring it covers.
    pub fn text(&self, range: Range) -> Result<String, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).text(range)
    }

    /// Returns the tokenizer run over the current content.
    pub fn tokenizer(&self) -> Result<Arc<TokenizerRun>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).tokenizer()
    }

    /// Returns the document's token stream.
    pub fn token_list(&self) -> Result<Arc<TokenList>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).token_list()
    }

    /// Returns the tokens on the default channel.
    pub fn default_channel_tokens(&self) -> Result<Vec<Token>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).default_channel_tokens()
    }

    /// Returns the comment tokens.
    pub fn comment_tokens(&self) -> Result<Vec<Token>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).comment_tokens()
    }

    /// Returns the parsed syntax tree.
    pub fn syntax_tree(&self) -> Result<Arc<SyntaxTree>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).syntax_tree()
    }

    /// Returns the symbol hierarchy.
    pub fn symbol_tree(&self) -> Result<Arc<SymbolTree>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).symbol_tree()
    }

    /// Returns the metrics snapshot of the current content version.
    pub fn metrics(&self) -> Result<Arc<Metrics>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).metrics()
    }

    /// Returns the file type resolved from the identity's extension.
    pub fn file_type(&self) -> FileType {
        let state = self.state.read().unwrap();
        self.view(&state).file_type()
    }

    /// Returns the cognitive complexity data.
    pub fn cognitive_complexity(&self) -> Result<Arc<ComplexityData>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).cognitive_complexity()
    }

    /// Returns the cyclomatic complexity data.
    pub fn cyclomatic_complexity(&self) -> Result<Arc<ComplexityData>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).cyclomatic_complexity()
    }

    /// Returns the diagnostic-suppression regions.
    pub fn diagnostic_ignorance(&self) -> Result<Arc<IgnoredRegions>, CacheError> {
        let state = self.state.read().unwrap();
        self.view(&state).diagnostic_ignorance()
    }

    /// Returns the module type from external metadata.
    pub fn module_type(&self) -> ModuleType {
        let state = self.state.read().unwrap();
        self.view(&state).module_type()
    }

    /// Returns the per-configuration support variants from external metadata.
    pub fn support_variants(&self) -> Arc<HashMap<ConfigurationId, SupportVariant>> {
        let state = self.state.read().unwrap();
        self.view(&state).support_variants()
    }

    /// Drops one cached artifact; visible to all subsequent getters.
    pub fn invalidate(&self, key: CacheKey) {
        let state = self.state.read().unwrap();
        state.slots.invalidate(key);
    }

    /// Returns `true` if the artifact is currently cached.
    pub fn is_cached(&self, key: CacheKey) -> bool {
        let state = self.state.read().unwrap();
        state.slots.is_cached(key)
    }

    /// Returns the cached symbol tree without triggering computation.
    pub fn peek_symbol_tree(&self) -> Option<Arc<SymbolTree>> {
        self.state.read().unwrap().slots.symbol_tree.peek()
    }

    /// Returns the cached token list without triggering computation.
    pub fn peek_token_list(&self) -> Option<Arc<TokenList>> {
        self.state.read().unwrap().slots.token_list.peek()
    }

    /// Returns the cached metrics without triggering computation.
    pub fn peek_metrics(&self) -> Option<Arc<Metrics>> {
        self.state.read().unwrap().slots.metrics.peek()
    }

    /// Replaces the document content, discarding every content-derived
    /// artifact.
    ///
    /// `FileType`, `ModuleType`, and `SupportVariants` keep their cached
    /// instances; they depend only on the document's identity. This is a full
    /// reset: the symbol tree is dropped outright, not lightened.
    pub fn replace_content(&self, content: impl Into<Arc<str>>) {
        let mut state = self.state.write().unwrap();
        for key in CacheKey::ALL {
            if key.is_content_derived() {
                state.slots.invalidate(key);
            }
        }
        state.content = Some(content.into());
    }

    /// Sheds the heavy data of an inactive document while keeping its
    /// lightweight structure queryable.
    ///
    /// Drops the raw content and every token/tree-derived artifact. A cached
    /// symbol tree stays cached, but each symbol's parse-tree back-reference
    /// is cleared; the skeleton (names, kinds, nesting, ranges) remains valid
    /// for cross-document symbol lookups. Content-derived getters fail with
    /// [`CacheError::ContentReleased`] until
    /// [`replace_content`](Self::replace_content) supplies new text.
    pub fn release_heavy_data(&self) {
        let mut state = self.state.write().unwrap();
        state.content = None;
        for key in [
            CacheKey::ContentLines,
            CacheKey::TokenList,
            CacheKey::SyntaxTree,
            CacheKey::Tokenizer,
            CacheKey::CognitiveComplexity,
            CacheKey::CyclomaticComplexity,
            CacheKey::Metrics,
            CacheKey::DiagnosticIgnorance,
        ] {
            state.slots.invalidate(key);
        }
        if let Some(symbol_tree) = state.slots.symbol_tree.peek() {
            for symbol in symbol_tree.children_flat() {
                symbol.clear_parse_tree();
            }
        }
    }
}

/// A read-locked view of a document handed to artifact computers.
///
/// Exposes the same artifact getters as [`DocumentCache`] while the caller
/// already holds the document's structural lock, so computers can pull their
/// dependency artifacts without re-entering it.
pub struct DocumentView<'a> {
    uri: &'a DocumentUri,
    host: &'a AnalyzerHost,
    state: &'a DocumentState,
}

impl DocumentView<'_> {
    /// Returns the document's identity.
    pub fn uri(&self) -> &DocumentUri {
        self.uri
    }

    /// Returns the raw document content.
    pub fn content(&self) -> Result<Arc<str>, CacheError> {
        self.state.content.clone().ok_or(CacheError::ContentReleased)
    }

    /// Returns the content split into lines.
    pub fn content_lines(&self) -> Result<Arc<Vec<String>>, CacheError> {
        self.state.slots.content_lines.get_or_try_compute(|| {
            let content = self.content()?;
            Ok(Arc::new(split_lines(&content)))
        })
    }

    /// Resolves a line/column range to the substring it covers.
    pub fn text(&self, range: Range) -> Result<String, CacheError> {
        let lines = self.content_lines()?;
        Ok(text_range(&lines, range)?)
    }

    /// Returns the tokenizer run over the current content.
    pub fn tokenizer(&self) -> Result<Arc<TokenizerRun>, CacheError> {
        self.state.slots.tokenizer.get_or_try_compute(|| {
            let content = self.content()?;
            Ok(Arc::new(self.host.syntax.tokenize(&content)?))
        })
    }

    /// Returns the document's token stream.
    pub fn token_list(&self) -> Result<Arc<TokenList>, CacheError> {
        self.state.slots.token_list.get_or_try_compute(|| {
            let run = self.tokenizer()?;
            Ok(Arc::new(run.tokens().clone()))
        })
    }

    /// Returns the tokens on the default channel.
    pub fn default_channel_tokens(&self) -> Result<Vec<Token>, CacheError> {
        Ok(self.token_list()?.default_channel().cloned().collect())
    }

    /// Returns the comment tokens.
    pub fn comment_tokens(&self) -> Result<Vec<Token>, CacheError> {
        Ok(self.token_list()?.comments().cloned().collect())
    }

    /// Returns the parsed syntax tree.
    pub fn syntax_tree(&self) -> Result<Arc<SyntaxTree>, CacheError> {
        self.state.slots.syntax_tree.get_or_try_compute(|| {
            let tokens = self.token_list()?;
            Ok(Arc::new(self.host.syntax.parse(&tokens)?))
        })
    }

    /// Returns the symbol hierarchy.
    pub fn symbol_tree(&self) -> Result<Arc<SymbolTree>, CacheError> {
        self.state
            .slots
            .symbol_tree
            .get_or_try_compute(|| Ok(Arc::new(self.host.symbols.build(self)?)))
    }

    /// Returns the cognitive complexity data.
    pub fn cognitive_complexity(&self) -> Result<Arc<ComplexityData>, CacheError> {
        self.state
            .slots
            .cognitive
            .get_or_try_compute(|| Ok(Arc::new(self.host.cognitive.compute(self)?)))
    }

    /// Returns the cyclomatic complexity data.
    pub fn cyclomatic_complexity(&self) -> Result<Arc<ComplexityData>, CacheError> {
        self.state
            .slots
            .cyclomatic
            .get_or_try_compute(|| Ok(Arc::new(self.host.cyclomatic.compute(self)?)))
    }

    /// Returns the diagnostic-suppression regions.
    pub fn diagnostic_ignorance(&self) -> Result<Arc<IgnoredRegions>, CacheError> {
        self.state
            .slots
            .ignorance
            .get_or_try_compute(|| Ok(Arc::new(self.host.ignorance.scan(self)?)))
    }

    /// Returns the file type resolved from the identity's extension.
    pub fn file_type(&self) -> FileType {
        *self.state.slots.file_type.get_or_compute(|| {
            Arc::new(FileType::from_extension(self.uri.extension().as_deref()))
        })
    }

    /// Returns the module type from external metadata.
    pub fn module_type(&self) -> ModuleType {
        *self
            .state
            .slots
            .module_type
            .get_or_compute(|| Arc::new(self.host.metadata.module_type(self.uri)))
    }

    /// Returns the per-configuration support variants from external metadata.
    pub fn support_variants(&self) -> Arc<HashMap<ConfigurationId, SupportVariant>> {
        self.state
            .slots
            .support_variants
            .get_or_compute(|| Arc::new(self.host.metadata.support_variants(self.uri)))
    }

    /// Returns the metrics snapshot of the current content version.
    pub fn metrics(&self) -> Result<Arc<Metrics>, CacheError> {
        self.state
            .slots
            .metrics
            .get_or_try_compute(|| Ok(Arc::new(self.compute_metrics()?)))
    }

    fn compute_metrics(&self) -> Result<Metrics, CacheError> {
        let methods = self.symbol_tree()?.methods();
        let functions = methods.iter().filter(|m| m.is_function()).count();
        let procedures = methods.len() - functions;

        let tokens = self.token_list()?;
        let mut ncloc_data: Vec<u32> = tokens.default_channel().map(Token::line).collect();
        ncloc_data.sort_unstable();
        ncloc_data.dedup();

        let mut comment_lines: Vec<u32> = tokens.comments().map(Token::line).collect();
        comment_lines.sort_unstable();
        comment_lines.dedup();

        let lines = tokens.last().map_or(0, Token::line);

        let tree = self.syntax_tree()?;
        let mut covloc_data: Vec<u32> = tree
            .descendants()
            .filter(|node| node.is_coverable())
            .map(|node| node.range().start.line + 1)
            .collect();
        covloc_data.sort_unstable();
        covloc_data.dedup();

        let statements = tree.count_nodes(NodeKind::Statement);

        Ok(Metrics {
            functions,
            procedures,
            ncloc: ncloc_data.len(),
            ncloc_data,
            covloc_data,
            lines,
            comments: comment_lines.len(),
            statements,
            cognitive_complexity: self.cognitive_complexity()?.file_complexity,
            cyclomatic_complexity: self.cyclomatic_complexity()?.file_complexity,
        })
    }
}
