//! Expression parsing.
//!
//! Pratt parsing: a prefix production yields the first operand, then infix
//! operators are folded in while they bind tighter than the caller's bound.
//! Recursing with an operator's own precedence makes equal-precedence
//! operators left-associative.
//!
//! Precedence, lowest to highest:
//!
//! | Level | Tokens |
//! |-------|--------|
//! | `Equals` | `==` `!=` |
//! | `LessGreater` | `<` `>` |
//! | `Sum` | `+` `-` |
//! | `Product` | `*` `/` |
//! | `Prefix` | `!x` `-x` |
//! | `Call` | `f(...)` |
//! | `Index` | `a[...]` |

mod primary;

use monkey_ir::{Expression, InfixOp, TokenKind};
use monkey_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// Binding power of an operator position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

/// What an infix-position token continues the expression with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Infix {
    Binary(InfixOp),
    Call,
    Subscript,
}

fn infix_of(kind: TokenKind) -> Option<(Infix, Precedence)> {
    let entry = match kind {
        TokenKind::EqEq => (Infix::Binary(InfixOp::Eq), Precedence::Equals),
        TokenKind::NotEq => (Infix::Binary(InfixOp::NotEq), Precedence::Equals),
        TokenKind::Lt => (Infix::Binary(InfixOp::Lt), Precedence::LessGreater),
        TokenKind::Gt => (Infix::Binary(InfixOp::Gt), Precedence::LessGreater),
        TokenKind::Plus => (Infix::Binary(InfixOp::Add), Precedence::Sum),
        TokenKind::Minus => (Infix::Binary(InfixOp::Sub), Precedence::Sum),
        TokenKind::Star => (Infix::Binary(InfixOp::Mul), Precedence::Product),
        TokenKind::Slash => (Infix::Binary(InfixOp::Div), Precedence::Product),
        TokenKind::LParen => (Infix::Call, Precedence::Call),
        TokenKind::LBracket => (Infix::Subscript, Precedence::Index),
        TokenKind::Ident
        | TokenKind::Int
        | TokenKind::Str
        | TokenKind::Fn
        | TokenKind::Let
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Macro
        | TokenKind::Assign
        | TokenKind::Bang
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Colon
        | TokenKind::RParen
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::RBracket
        | TokenKind::Illegal
        | TokenKind::Eof => return None,
    };
    Some(entry)
}

impl Parser<'_> {
    /// Parse an expression whose operators all bind tighter than `precedence`.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input grows the stack.
    pub(crate) fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> Result<Expression, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
        let mut left = self.parse_prefix()?;

        while let Some((infix, next)) = infix_of(self.cursor.current_kind()) {
            if next <= precedence {
                break;
            }
            left = match infix {
                Infix::Binary(op) => {
                    self.cursor.advance();
                    let right = self.parse_expression(next)?;
                    Expression::infix(op, left, right)
                }
                Infix::Call => self.parse_call(left)?,
                Infix::Subscript => self.parse_subscript(left)?,
            };
        }

        Ok(left)
    }

    /// `CALLEE(ARG, ...)`
    fn parse_call(&mut self, callee: Expression) -> Result<Expression, ParseError> {
        self.cursor.advance();
        let arguments =
            self.parse_comma_list(TokenKind::RParen, |p| p.parse_expression(Precedence::Lowest))?;
        Ok(Expression::call(callee, arguments))
    }

    /// `TARGET[INDEX]`
    fn parse_subscript(&mut self, target: Expression) -> Result<Expression, ParseError> {
        self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect(TokenKind::RBracket)?;
        Ok(Expression::Subscript {
            target: Box::new(target),
            index: Box::new(index),
        })
    }

    /// Parse `ITEM, ITEM, ... CLOSE` after the opening delimiter.
    ///
    /// Shared by parameter lists, call arguments, array elements and hash
    /// pairs.
    pub(crate) fn parse_comma_list<T>(
        &mut self,
        close: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        if self.cursor.eat(close) {
            return Ok(items);
        }
        loop {
            items.push(item(self)?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(close)?;
        Ok(items)
    }
}
