//! Syntax trees produced by the external parser.

use larch_source::Range;
use std::sync::Arc;

/// The kind of a syntax node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NodeKind {
    /// The root node covering the whole document.
    File,
    /// A statement.
    Statement,
    /// A call of a global procedure or function.
    GlobalCall,
    /// A variable name.
    VariableName,
    /// Any other expression or rule node.
    Expression,
    /// A terminal leaf wrapping a single token.
    Terminal,
}

/// One node of the syntax tree.
#[derive(Debug)]
pub struct SyntaxNode {
    kind: NodeKind,
    range: Range,
    children: Vec<Arc<SyntaxNode>>,
}

impl SyntaxNode {
    /// Creates a node with children.
    pub fn new(kind: NodeKind, range: Range, children: Vec<Arc<SyntaxNode>>) -> Self {
        Self {
            kind,
            range,
            children,
        }
    }

    /// Creates a childless node.
    pub fn leaf(kind: NodeKind, range: Range) -> Self {
        Self::new(kind, range, Vec::new())
    }

    /// Returns the node's kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the node's source range.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Returns the node's children.
    pub fn children(&self) -> &[Arc<SyntaxNode>] {
        &self.children
    }

    /// Iterates over this node and everything beneath it in preorder.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Returns `true` if the node counts toward coverable lines.
    ///
    /// Coverable nodes are statements, global calls, and variable names;
    /// terminal leaves never count.
    pub fn is_coverable(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Statement | NodeKind::GlobalCall | NodeKind::VariableName
        )
    }
}

/// Preorder iterator over a subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push(child.as_ref());
        }
        Some(node)
    }
}

/// A parsed document.
#[derive(Debug)]
pub struct SyntaxTree {
    root: Arc<SyntaxNode>,
}

impl SyntaxTree {
    /// Creates a tree from its root node.
    pub fn new(root: Arc<SyntaxNode>) -> Self {
        Self { root }
    }

    /// Returns the root node.
    pub fn root(&self) -> &Arc<SyntaxNode> {
        &self.root
    }

    /// Iterates over every node in the tree in preorder.
    pub fn descendants(&self) -> Descendants<'_> {
        self.root.descendants()
    }

    /// Counts the nodes of the given kind.
    pub fn count_nodes(&self, kind: NodeKind) -> usize {
        self.descendants().filter(|n| n.kind() == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: NodeKind, line: u32, children: Vec<Arc<SyntaxNode>>) -> Arc<SyntaxNode> {
        Arc::new(SyntaxNode::new(kind, Range::of(line, 0, line, 5), children))
    }

    fn sample() -> SyntaxTree {
        let stmt1 = node(
            NodeKind::Statement,
            0,
            vec![node(NodeKind::Terminal, 0, vec![])],
        );
        let stmt2 = node(
            NodeKind::Statement,
            1,
            vec![node(NodeKind::VariableName, 1, vec![])],
        );
        SyntaxTree::new(node(NodeKind::File, 0, vec![stmt1, stmt2]))
    }

    #[test]
    fn preorder_traversal() {
        let tree = sample();
        let kinds: Vec<NodeKind> = tree.descendants().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::File,
                NodeKind::Statement,
                NodeKind::Terminal,
                NodeKind::Statement,
                NodeKind::VariableName,
            ]
        );
    }

    #[test]
    fn count_nodes() {
        let tree = sample();
        assert_eq!(tree.count_nodes(NodeKind::Statement), 2);
        assert_eq!(tree.count_nodes(NodeKind::GlobalCall), 0);
    }

    #[test]
    fn coverable_excludes_terminals() {
        let tree = sample();
        let coverable = tree.descendants().filter(|n| n.is_coverable()).count();
        // Two statements and one variable name; terminals and the file
        // root don't count.
        assert_eq!(coverable, 3);
    }
}
