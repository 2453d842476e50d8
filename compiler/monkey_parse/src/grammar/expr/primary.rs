//! Prefix productions: literals, names, unary operators, grouping and the
//! keyword-introduced forms.

use std::rc::Rc;

use monkey_ir::{Expression, FunctionLiteral, Identifier, PrefixOp, TokenKind};

use crate::recovery::{TokenSet, EXPR_FOLLOW, STMT_BOUNDARY};
use crate::{ParseError, ParseErrorKind, Parser, Precedence};

/// Tokens a failed prefix production leaves in place for an enclosing
/// production (or the next statement) to consume.
const PREFIX_RECOVERY: TokenSet = EXPR_FOLLOW.union(STMT_BOUNDARY);

impl Parser<'_> {
    pub(super) fn parse_prefix(&mut self) -> Result<Expression, ParseError> {
        let kind = self.cursor.current_kind();
        match kind {
            TokenKind::Ident => Ok(Expression::ident(self.cursor.advance().literal.clone())),
            TokenKind::Int => Ok(self.parse_integer()),
            TokenKind::Str => Ok(Expression::String(self.cursor.advance().literal.clone())),
            TokenKind::True | TokenKind::False => {
                self.cursor.advance();
                Ok(Expression::Boolean(kind == TokenKind::True))
            }
            TokenKind::Bang => self.parse_prefix_operator(PrefixOp::Not),
            TokenKind::Minus => self.parse_prefix_operator(PrefixOp::Neg),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Fn => Ok(Expression::Function(Rc::new(
                self.parse_function_literal()?,
            ))),
            TokenKind::Macro => Ok(Expression::Macro(Rc::new(self.parse_function_literal()?))),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::LBrace => self.parse_hash(),
            TokenKind::Let
            | TokenKind::Else
            | TokenKind::Return
            | TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::EqEq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Colon
            | TokenKind::RParen
            | TokenKind::RBrace
            | TokenKind::RBracket
            | TokenKind::Illegal
            | TokenKind::Eof => Ok(self.no_prefix_parser(kind)),
        }
    }

    /// Record the missing production and leave `Invalid` in its place.
    fn no_prefix_parser(&mut self, kind: TokenKind) -> Expression {
        self.report_at(
            ParseErrorKind::NoPrefixParser(kind),
            self.cursor.current_span(),
        );
        if !PREFIX_RECOVERY.contains(kind) {
            self.cursor.advance();
        }
        Expression::Invalid
    }

    fn parse_integer(&mut self) -> Expression {
        let token = self.cursor.advance();
        match token.literal.parse::<i64>() {
            Ok(value) => Expression::Integer(value),
            Err(_) => {
                self.report_at(
                    ParseErrorKind::InvalidInteger(token.literal.clone()),
                    token.span,
                );
                Expression::Invalid
            }
        }
    }

    fn parse_prefix_operator(&mut self, op: PrefixOp) -> Result<Expression, ParseError> {
        self.cursor.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::prefix(op, operand))
    }

    /// `( EXPR )`
    fn parse_grouped(&mut self) -> Result<Expression, ParseError> {
        self.cursor.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect(TokenKind::RParen)?;
        Ok(expr)
    }

    /// `if ( COND ) { ... } [else { ... }]`
    fn parse_if(&mut self) -> Result<Expression, ParseError> {
        self.cursor.advance();
        self.cursor.expect(TokenKind::LParen)?;
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect(TokenKind::RParen)?;
        let consequence = self.parse_block()?;
        let alternative = if self.cursor.eat(TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// `fn ( PARAMS ) { ... }` or `macro ( PARAMS ) { ... }`, keyword included.
    fn parse_function_literal(&mut self) -> Result<FunctionLiteral, ParseError> {
        self.cursor.advance();
        self.cursor.expect(TokenKind::LParen)?;
        let parameters = self.parse_comma_list(TokenKind::RParen, |p| {
            let name = p.cursor.expect(TokenKind::Ident)?;
            Ok(Identifier::new(name.literal.clone()))
        })?;
        let body = self.parse_block()?;
        Ok(FunctionLiteral { parameters, body })
    }

    /// `[ ELEM, ... ]`
    fn parse_array(&mut self) -> Result<Expression, ParseError> {
        self.cursor.advance();
        let elements = self.parse_comma_list(TokenKind::RBracket, |p| {
            p.parse_expression(Precedence::Lowest)
        })?;
        Ok(Expression::Array(elements))
    }

    /// `{ KEY: VALUE, ... }`
    fn parse_hash(&mut self) -> Result<Expression, ParseError> {
        self.cursor.advance();
        let pairs = self.parse_comma_list(TokenKind::RBrace, |p| {
            let key = p.parse_expression(Precedence::Lowest)?;
            p.cursor.expect(TokenKind::Colon)?;
            let value = p.parse_expression(Precedence::Lowest)?;
            Ok((key, value))
        })?;
        Ok(Expression::Hash(pairs))
    }
}
