//! Tokens and immutable token streams.

use larch_source::Range;
use std::sync::Arc;

/// The lexical channel a token was emitted on.
///
/// Diagnostic rules and metrics generally consume the default channel;
/// comments and whitespace live on the hidden channel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenChannel {
    /// Tokens that participate in parsing.
    Default,
    /// Comments and whitespace, skipped by the parser.
    Hidden,
}

/// The lexical kind of a token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    /// An identifier.
    Identifier,
    /// A reserved keyword.
    Keyword,
    /// A numeric literal.
    Number,
    /// A string literal.
    String,
    /// Punctuation or an operator.
    Punctuation,
    /// A line comment.
    LineComment,
    /// A run of whitespace.
    Whitespace,
}

/// One lexical token with its location and text.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    kind: TokenKind,
    channel: TokenChannel,
    line: u32,
    range: Range,
    text: String,
}

impl Token {
    /// Creates a new token.
    ///
    /// `line` is the one-based line the token starts on; `range` uses
    /// zero-based coordinates.
    pub fn new(
        kind: TokenKind,
        channel: TokenChannel,
        line: u32,
        range: Range,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            channel,
            line,
            range,
            text: text.into(),
        }
    }

    /// Returns the token's lexical kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the channel the token was emitted on.
    pub fn channel(&self) -> TokenChannel {
        self.channel
    }

    /// Returns the one-based line the token starts on.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the token's source range.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Returns the token's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the token is a comment.
    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::LineComment
    }
}

/// An immutable, cheaply cloneable token sequence.
#[derive(Clone, Debug)]
pub struct TokenList {
    tokens: Arc<[Token]>,
}

impl TokenList {
    /// Creates a token list from a vector of tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }

    /// Creates an empty token list.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the list contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the last token, if any.
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Iterates over all tokens in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Iterates over tokens on the default channel.
    pub fn default_channel(&self) -> impl Iterator<Item = &Token> {
        self.iter().filter(|t| t.channel() == TokenChannel::Default)
    }

    /// Iterates over comment tokens.
    pub fn comments(&self) -> impl Iterator<Item = &Token> {
        self.iter().filter(|t| t.is_comment())
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The output bundle of one tokenizer invocation over one content snapshot.
///
/// This is the artifact cached under the `Tokenizer` key; the token list it
/// owns is handed out separately under the `TokenList` key.
#[derive(Clone, Debug)]
pub struct TokenizerRun {
    tokens: TokenList,
}

impl TokenizerRun {
    /// Wraps the token list produced by a tokenizer invocation.
    pub fn new(tokens: TokenList) -> Self {
        Self { tokens }
    }

    /// Returns the tokens produced by this run.
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }
}
