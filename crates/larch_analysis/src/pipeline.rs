//! Parallel fan-out of diagnostic rules with per-rule fault isolation.

use crate::rule::DiagnosticRule;
use dashmap::DashMap;
use larch_context::{CacheError, DocumentCache};
use larch_diagnostics::Finding;
use larch_source::DocumentUri;
use rayon::prelude::*;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

/// Runs diagnostic rules against documents and stores the latest result set
/// per document identity.
///
/// One pipeline instance is shared by all documents; concurrent runs for
/// different documents only meet at the stored-result map, whose updates are
/// atomic per identity. A run replaces the stored list wholesale — there is
/// no merge with history.
pub struct DiagnosticPipeline {
    stored: DashMap<DocumentUri, Vec<Finding>>,
}

impl DiagnosticPipeline {
    /// The analyzer name stamped on every published finding.
    pub const SOURCE: &'static str = "larch-language-server";

    /// Creates a pipeline with no stored results.
    pub fn new() -> Self {
        Self {
            stored: DashMap::new(),
        }
    }

    /// Evaluates every rule against the document, in parallel and with no
    /// ordering guarantee between rules.
    ///
    /// A faulting rule (error return or panic) contributes zero findings;
    /// the fault is logged with the rule's code and the document identity
    /// and never affects other rules. Findings inside suppression regions
    /// are dropped, exact duplicates are removed keeping first occurrence,
    /// and the final list replaces any previously stored result for this
    /// document before being returned.
    ///
    /// Only a failure to compute the document's suppression regions aborts
    /// the run; that error propagates to the caller.
    pub fn run(
        &self,
        document: &DocumentCache,
        rules: &[Box<dyn DiagnosticRule>],
    ) -> Result<Vec<Finding>, CacheError> {
        let ignorance = document.diagnostic_ignorance()?;

        let mut findings: Vec<Finding> = rules
            .par_iter()
            .flat_map_iter(|rule| check_isolated(document, rule.as_ref()))
            .collect();

        findings.retain(|finding| !ignorance.is_ignored(finding));

        let mut seen = HashSet::with_capacity(findings.len());
        findings.retain(|finding| seen.insert(finding.clone()));

        self.stored
            .insert(document.uri().clone(), findings.clone());

        Ok(findings)
    }

    /// Returns the most recently stored findings for a document, or an
    /// empty list if none exist.
    pub fn stored(&self, uri: &DocumentUri) -> Vec<Finding> {
        self.stored
            .get(uri)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Resets the stored findings of one document to empty.
    pub fn clear_stored(&self, uri: &DocumentUri) {
        self.stored.insert(uri.clone(), Vec::new());
    }

    /// Drops the stored findings of every document.
    pub fn clear_all_stored(&self) {
        self.stored.clear();
    }
}

impl Default for DiagnosticPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates one rule, converting any fault into zero findings.
fn check_isolated(document: &DocumentCache, rule: &dyn DiagnosticRule) -> Vec<Finding> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| rule.check(document)));
    match outcome {
        Ok(Ok(mut findings)) => {
            for finding in &mut findings {
                finding.source = DiagnosticPipeline::SOURCE.to_string();
            }
            findings
        }
        Ok(Err(fault)) => {
            error!(
                uri = %document.uri(),
                rule = %rule.code(),
                error = %fault,
                "diagnostic rule failed"
            );
            Vec::new()
        }
        Err(_) => {
            error!(
                uri = %document.uri(),
                rule = %rule.code(),
                "diagnostic rule panicked"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;
    use larch_context::computer::{
        ComplexityAnalyzer, IgnoranceScanner, MetadataProvider, SymbolTreeBuilder, SyntaxProvider,
    };
    use larch_context::{
        AnalyzerHost, ConfigurationId, DocumentView, IgnoredRegions, LineSpan, ModuleType,
        SupportVariant,
    };
    use larch_diagnostics::{RuleCode, Severity};
    use larch_source::Range;
    use larch_syntax::{
        ComplexityData, SymbolTree, SyntaxError, SyntaxTree, TokenList, TokenizerRun,
    };
    use larch_syntax::{NodeKind, SyntaxNode};
    use std::collections::HashMap;
    use std::sync::Arc;

    struct EmptySyntax;

    impl SyntaxProvider for EmptySyntax {
        fn tokenize(&self, _content: &str) -> Result<TokenizerRun, SyntaxError> {
            Ok(TokenizerRun::new(TokenList::empty()))
        }

        fn parse(&self, _tokens: &TokenList) -> Result<SyntaxTree, SyntaxError> {
            Ok(SyntaxTree::new(Arc::new(SyntaxNode::leaf(
                NodeKind::File,
                Range::of(0, 0, 0, 0),
            ))))
        }
    }

    struct EmptySymbols;

    impl SymbolTreeBuilder for EmptySymbols {
        fn build(&self, _document: &DocumentView<'_>) -> Result<SymbolTree, CacheError> {
            Ok(SymbolTree::empty())
        }
    }

    struct ZeroComplexity;

    impl ComplexityAnalyzer for ZeroComplexity {
        fn compute(&self, _document: &DocumentView<'_>) -> Result<ComplexityData, CacheError> {
            Ok(ComplexityData::default())
        }
    }

    struct FixedIgnorance(IgnoredRegions);

    impl IgnoranceScanner for FixedIgnorance {
        fn scan(&self, _document: &DocumentView<'_>) -> Result<IgnoredRegions, CacheError> {
            Ok(self.0.clone())
        }
    }

    struct FailingIgnorance;

    impl IgnoranceScanner for FailingIgnorance {
        fn scan(&self, _document: &DocumentView<'_>) -> Result<IgnoredRegions, CacheError> {
            Err(CacheError::Compute {
                computer: "ignore-region scanner",
                message: "unparsable directive".to_string(),
            })
        }
    }

    struct NoMetadata;

    impl MetadataProvider for NoMetadata {
        fn module_type(&self, _uri: &larch_source::DocumentUri) -> ModuleType {
            ModuleType::Unknown
        }

        fn support_variants(
            &self,
            _uri: &larch_source::DocumentUri,
        ) -> HashMap<ConfigurationId, SupportVariant> {
            HashMap::new()
        }
    }

    fn host_with_scanner(scanner: Arc<dyn IgnoranceScanner>) -> Arc<AnalyzerHost> {
        Arc::new(AnalyzerHost {
            syntax: Arc::new(EmptySyntax),
            symbols: Arc::new(EmptySymbols),
            cognitive: Arc::new(ZeroComplexity),
            cyclomatic: Arc::new(ZeroComplexity),
            ignorance: scanner,
            metadata: Arc::new(NoMetadata),
        })
    }

    fn document(scanner: Arc<dyn IgnoranceScanner>) -> DocumentCache {
        DocumentCache::new(
            larch_source::DocumentUri::new("file:///project/module.lar"),
            "content",
            host_with_scanner(scanner),
        )
    }

    fn finding(code: &'static str, line: u32, message: &str) -> Finding {
        Finding::new(
            RuleCode::from_static(code),
            Severity::Warning,
            message,
            Range::of(line, 0, line, 5),
        )
    }

    /// A rule returning a canned list of findings.
    struct StaticRule {
        code: &'static str,
        findings: Vec<Finding>,
    }

    impl DiagnosticRule for StaticRule {
        fn code(&self) -> RuleCode {
            RuleCode::from_static(self.code)
        }

        fn check(&self, _document: &DocumentCache) -> Result<Vec<Finding>, RuleError> {
            Ok(self.findings.clone())
        }
    }

    struct FailingRule;

    impl DiagnosticRule for FailingRule {
        fn code(&self) -> RuleCode {
            RuleCode::from_static("failing-rule")
        }

        fn check(&self, _document: &DocumentCache) -> Result<Vec<Finding>, RuleError> {
            Err(RuleError::Failed("internal inconsistency".to_string()))
        }
    }

    struct PanickingRule;

    impl DiagnosticRule for PanickingRule {
        fn code(&self) -> RuleCode {
            RuleCode::from_static("panicking-rule")
        }

        fn check(&self, _document: &DocumentCache) -> Result<Vec<Finding>, RuleError> {
            panic!("rule blew up");
        }
    }

    fn rule(code: &'static str, findings: Vec<Finding>) -> Box<dyn DiagnosticRule> {
        Box::new(StaticRule { code, findings })
    }

    #[test]
    fn faulting_rule_does_not_suppress_others() {
        let doc = document(Arc::new(FixedIgnorance(IgnoredRegions::default())));
        let pipeline = DiagnosticPipeline::new();
        let rules: Vec<Box<dyn DiagnosticRule>> = vec![
            rule("rule-a", vec![finding("rule-a", 0, "from a")]),
            Box::new(FailingRule),
            rule("rule-c", vec![finding("rule-c", 2, "from c")]),
        ];

        let findings = pipeline.run(&doc, &rules).unwrap();
        let codes: HashSet<&str> = findings.iter().map(|f| f.code.as_str()).collect();
        assert_eq!(findings.len(), 2);
        assert_eq!(codes, HashSet::from(["rule-a", "rule-c"]));
    }

    #[test]
    fn panicking_rule_is_isolated() {
        let doc = document(Arc::new(FixedIgnorance(IgnoredRegions::default())));
        let pipeline = DiagnosticPipeline::new();
        let rules: Vec<Box<dyn DiagnosticRule>> = vec![
            Box::new(PanickingRule),
            rule("survivor", vec![finding("survivor", 1, "still here")]),
        ];

        let findings = pipeline.run(&doc, &rules).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code.as_str(), "survivor");
    }

    #[test]
    fn ignored_findings_are_dropped_and_duplicates_removed() {
        let regions = IgnoredRegions::new(vec![LineSpan::line(4)], HashMap::new());
        let doc = document(Arc::new(FixedIgnorance(regions)));
        let pipeline = DiagnosticPipeline::new();

        let suppressed = finding("shared", 4, "inside ignored region");
        let kept = finding("shared", 1, "outside");
        let rules: Vec<Box<dyn DiagnosticRule>> = vec![
            rule("first", vec![suppressed.clone(), kept.clone()]),
            rule("second", vec![suppressed]),
        ];

        let findings = pipeline.run(&doc, &rules).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].range.start.line, 1);
        assert_eq!(findings[0].source, DiagnosticPipeline::SOURCE);
    }

    #[test]
    fn duplicate_findings_from_overlapping_rules_collapse() {
        let doc = document(Arc::new(FixedIgnorance(IgnoredRegions::default())));
        let pipeline = DiagnosticPipeline::new();
        let same = finding("dup", 2, "reported twice");
        let rules: Vec<Box<dyn DiagnosticRule>> = vec![
            rule("one", vec![same.clone()]),
            rule("two", vec![same]),
        ];

        let findings = pipeline.run(&doc, &rules).unwrap();
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn second_run_replaces_stored_results() {
        let doc = document(Arc::new(FixedIgnorance(IgnoredRegions::default())));
        let pipeline = DiagnosticPipeline::new();

        let first_rules: Vec<Box<dyn DiagnosticRule>> =
            vec![rule("old", vec![finding("old", 0, "first run")])];
        pipeline.run(&doc, &first_rules).unwrap();
        assert_eq!(pipeline.stored(doc.uri()).len(), 1);
        assert_eq!(pipeline.stored(doc.uri())[0].code.as_str(), "old");

        let second_rules: Vec<Box<dyn DiagnosticRule>> =
            vec![rule("new", vec![finding("new", 3, "second run")])];
        pipeline.run(&doc, &second_rules).unwrap();

        let stored = pipeline.stored(doc.uri());
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].code.as_str(), "new");
    }

    #[test]
    fn stored_defaults_to_empty_and_clears() {
        let doc = document(Arc::new(FixedIgnorance(IgnoredRegions::default())));
        let pipeline = DiagnosticPipeline::new();
        assert!(pipeline.stored(doc.uri()).is_empty());

        let rules: Vec<Box<dyn DiagnosticRule>> =
            vec![rule("r", vec![finding("r", 0, "present")])];
        pipeline.run(&doc, &rules).unwrap();
        assert_eq!(pipeline.stored(doc.uri()).len(), 1);

        pipeline.clear_stored(doc.uri());
        assert!(pipeline.stored(doc.uri()).is_empty());

        pipeline.run(&doc, &rules).unwrap();
        pipeline.clear_all_stored();
        assert!(pipeline.stored(doc.uri()).is_empty());
    }

    #[test]
    fn ignorance_failure_aborts_the_run() {
        let doc = document(Arc::new(FailingIgnorance));
        let pipeline = DiagnosticPipeline::new();
        let rules: Vec<Box<dyn DiagnosticRule>> =
            vec![rule("r", vec![finding("r", 0, "unreached")])];

        let outcome = pipeline.run(&doc, &rules);
        assert!(matches!(outcome, Err(CacheError::Compute { .. })));
        assert!(pipeline.stored(doc.uri()).is_empty());
    }
}
