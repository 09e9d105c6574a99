//! Token, syntax-tree, and symbol-tree types produced at the tokenizer,
//! parser, and symbol-builder boundaries.
//!
//! The document cache stores values of these types as artifacts; the types
//! themselves carry no computation. Symbol trees use two-tier ownership:
//! the lightweight skeleton (names, kinds, ranges, nesting) is unconditional,
//! while each symbol's parse-tree back-reference is optional and can be
//! dropped under memory pressure without touching the skeleton.

#![warn(missing_docs)]

pub mod complexity;
pub mod error;
pub mod symbol;
pub mod token;
pub mod tree;

pub use complexity::{ComplexityData, MethodComplexity};
pub use error::SyntaxError;
pub use symbol::{Symbol, SymbolKind, SymbolTree};
pub use token::{Token, TokenChannel, TokenKind, TokenList, TokenizerRun};
pub use tree::{NodeKind, SyntaxNode, SyntaxTree};
