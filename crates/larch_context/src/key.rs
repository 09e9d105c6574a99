//! Cache keys identifying the artifact kinds of a document.

use std::fmt;

/// Identifies one kind of cached artifact in a [`DocumentCache`](crate::DocumentCache).
///
/// The set is closed: every artifact the cache can hold has exactly one key.
/// `FileType`, `ModuleType`, and `SupportVariants` depend only on the
/// document's identity and external metadata; every other key is derived
/// from content and falls inside the invalidation cascade of
/// [`replace_content`](crate::DocumentCache::replace_content).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CacheKey {
    /// The tokenizer run over the current content.
    Tokenizer,
    /// The content split into lines.
    ContentLines,
    /// The parsed syntax tree.
    SyntaxTree,
    /// The symbol hierarchy.
    SymbolTree,
    /// The full token stream.
    TokenList,
    /// The metrics snapshot.
    Metrics,
    /// The file type resolved from the identity's extension.
    FileType,
    /// Cognitive complexity data.
    CognitiveComplexity,
    /// Cyclomatic complexity data.
    CyclomaticComplexity,
    /// Diagnostic-suppression regions parsed from comments.
    DiagnosticIgnorance,
    /// The module type resolved from external metadata.
    ModuleType,
    /// Per-configuration support variants from external metadata.
    SupportVariants,
}

impl CacheKey {
    /// Every cache key, in declaration order.
    pub const ALL: [CacheKey; 12] = [
        CacheKey::Tokenizer,
        CacheKey::ContentLines,
        CacheKey::SyntaxTree,
        CacheKey::SymbolTree,
        CacheKey::TokenList,
        CacheKey::Metrics,
        CacheKey::FileType,
        CacheKey::CognitiveComplexity,
        CacheKey::CyclomaticComplexity,
        CacheKey::DiagnosticIgnorance,
        CacheKey::ModuleType,
        CacheKey::SupportVariants,
    ];

    /// Returns `true` if the artifact is derived from document content and
    /// must be invalidated whenever the content changes.
    pub fn is_content_derived(self) -> bool {
        !matches!(
            self,
            CacheKey::FileType | CacheKey::ModuleType | CacheKey::SupportVariants
        )
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_key_once() {
        let mut seen = std::collections::HashSet::new();
        for key in CacheKey::ALL {
            assert!(seen.insert(key));
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn identity_derived_keys_survive_content_changes() {
        let identity_only: Vec<CacheKey> = CacheKey::ALL
            .into_iter()
            .filter(|k| !k.is_content_derived())
            .collect();
        assert_eq!(
            identity_only,
            vec![
                CacheKey::FileType,
                CacheKey::ModuleType,
                CacheKey::SupportVariants
            ]
        );
    }
}
