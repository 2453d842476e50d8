//! Parse error types.

use monkey_ir::{Span, TokenKind};
use thiserror::Error;

/// What went wrong.
///
/// `Display` produces the diagnostic text callers show to users.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A required token was missing.
    #[error("expected {expected}, got {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// The token cannot start an expression.
    #[error("no prefix parser for token kind {0}")]
    NoPrefixParser(TokenKind),

    /// An integer literal does not fit in 64 bits.
    #[error("could not parse {0} as integer")]
    InvalidInteger(String),
}

/// A parse diagnostic with its source location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }
}
