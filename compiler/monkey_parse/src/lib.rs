//! Pratt parser for Monkey.
//!
//! Turns a `TokenList` into a `Program`. Parsing never fails outright:
//! diagnostics are collected in [`ParseOutput::errors`] and the parser keeps
//! going, leaving `Expression::Invalid` where a production could not be
//! completed.

mod cursor;
mod error;
mod grammar;
mod recovery;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use grammar::Precedence;
pub use recovery::{synchronize, TokenSet};

use monkey_ir::{Program, Span, TokenList};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
    /// Number of enclosing `{ ... }` blocks.
    block_depth: usize,
}

/// Result of parsing: the program plus every diagnostic recorded on the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Diagnostic texts in the order they were recorded.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
            block_depth: 0,
        }
    }

    /// Parse the whole token stream.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.parse_statement_with_recovery());
        }
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    /// Record a diagnostic and keep parsing.
    fn report(&mut self, error: ParseError) {
        debug!(error = %error, span = ?error.span, "parse error");
        self.errors.push(error);
    }

    fn report_at(&mut self, kind: ParseErrorKind, span: Span) {
        self.report(ParseError::new(kind, span));
    }
}

/// Parse a token stream into a program and its diagnostics.
pub fn parse(tokens: &TokenList) -> ParseOutput {
    Parser::new(tokens).parse_program()
}
