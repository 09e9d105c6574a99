//! Failure types for the tokenizer/parser boundary.

/// Errors raised by the external tokenizer or parser.
///
/// These are not swallowed by the cache: a failed tokenization or parse
/// propagates to whoever requested the artifact, and nothing is cached.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    /// The tokenizer could not process the content.
    #[error("tokenization failed at line {line}: {message}")]
    Tokenize {
        /// One-based line where tokenization stopped.
        line: u32,
        /// Description of the failure.
        message: String,
    },

    /// The parser could not build a syntax tree from the token stream.
    #[error("parse failed: {message}")]
    Parse {
        /// Description of the failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location() {
        let err = SyntaxError::Tokenize {
            line: 12,
            message: "unterminated string".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 12"));
        assert!(msg.contains("unterminated string"));
    }
}
