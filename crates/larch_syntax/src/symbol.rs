//! Symbol trees with droppable parse-tree back-references.

use crate::tree::SyntaxNode;
use larch_source::Range;
use std::sync::{Arc, Mutex};

/// The kind of a symbol.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SymbolKind {
    /// A procedure or function.
    Method {
        /// `true` if the method declares a return value, making it a
        /// function rather than a procedure.
        returns_value: bool,
    },
    /// A module-level or local variable.
    Variable,
    /// A named region grouping other symbols.
    Region,
}

/// One node of the symbol tree.
///
/// The skeleton fields (name, kind, range, children) are immutable and always
/// present. The parse-tree back-reference is an optional association that can
/// be attached and cleared through a shared reference; dropping it releases
/// the heavy syntax-tree data while the skeleton stays queryable.
#[derive(Debug)]
pub struct Symbol {
    name: String,
    kind: SymbolKind,
    range: Range,
    children: Vec<Arc<Symbol>>,
    parse_tree: Mutex<Option<Arc<SyntaxNode>>>,
}

impl Symbol {
    /// Creates a childless symbol without a parse-tree reference.
    pub fn new(name: impl Into<String>, kind: SymbolKind, range: Range) -> Self {
        Self {
            name: name.into(),
            kind,
            range,
            children: Vec::new(),
            parse_tree: Mutex::new(None),
        }
    }

    /// Adds child symbols.
    pub fn with_children(mut self, children: Vec<Arc<Symbol>>) -> Self {
        self.children = children;
        self
    }

    /// Attaches a parse-tree back-reference at construction time.
    pub fn with_parse_tree(self, node: Arc<SyntaxNode>) -> Self {
        *self.parse_tree.lock().unwrap() = Some(node);
        self
    }

    /// Returns the symbol's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the symbol's kind.
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Returns the symbol's source range.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Returns the symbol's direct children.
    pub fn children(&self) -> &[Arc<Symbol>] {
        &self.children
    }

    /// Returns `true` if this symbol is a method.
    pub fn is_method(&self) -> bool {
        matches!(self.kind, SymbolKind::Method { .. })
    }

    /// Returns `true` if this symbol is a function, i.e. a method that
    /// declares a return value.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Method { returns_value: true })
    }

    /// Returns the parse-tree back-reference, if still attached.
    pub fn parse_tree(&self) -> Option<Arc<SyntaxNode>> {
        self.parse_tree.lock().unwrap().clone()
    }

    /// Attaches or replaces the parse-tree back-reference.
    pub fn attach_parse_tree(&self, node: Arc<SyntaxNode>) {
        *self.parse_tree.lock().unwrap() = Some(node);
    }

    /// Drops the parse-tree back-reference, keeping the skeleton intact.
    pub fn clear_parse_tree(&self) {
        *self.parse_tree.lock().unwrap() = None;
    }
}

/// The rooted symbol hierarchy of one document.
#[derive(Debug)]
pub struct SymbolTree {
    children: Vec<Arc<Symbol>>,
}

impl SymbolTree {
    /// Creates a symbol tree from its top-level symbols.
    pub fn new(children: Vec<Arc<Symbol>>) -> Self {
        Self { children }
    }

    /// Creates an empty symbol tree.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the top-level symbols.
    pub fn children(&self) -> &[Arc<Symbol>] {
        &self.children
    }

    /// Returns every symbol in the tree, flattened in preorder.
    pub fn children_flat(&self) -> Vec<Arc<Symbol>> {
        let mut flat = Vec::new();
        let mut stack: Vec<&Arc<Symbol>> = self.children.iter().rev().collect();
        while let Some(symbol) = stack.pop() {
            flat.push(Arc::clone(symbol));
            for child in symbol.children().iter().rev() {
                stack.push(child);
            }
        }
        flat
    }

    /// Returns every method symbol in the tree.
    pub fn methods(&self) -> Vec<Arc<Symbol>> {
        self.children_flat()
            .into_iter()
            .filter(|s| s.is_method())
            .collect()
    }
}
