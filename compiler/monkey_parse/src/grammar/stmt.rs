//! Statement and block parsing.

use monkey_ir::{Block, Expression, Identifier, Statement, TokenKind};

use crate::recovery::{synchronize, STMT_BOUNDARY, TOP_LEVEL_BOUNDARY};
use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    /// Parse one statement, recovering from any error inside it.
    ///
    /// A failed statement is recorded, skipped, and kept as an expression
    /// statement holding `Invalid`. Always consumes at least one token.
    pub(crate) fn parse_statement_with_recovery(&mut self) -> Statement {
        let start = self.cursor.position();
        let stmt = match self.parse_statement() {
            Ok(stmt) => stmt,
            Err(error) => {
                self.report(error);
                let boundary = if self.block_depth == 0 {
                    TOP_LEVEL_BOUNDARY
                } else {
                    STMT_BOUNDARY
                };
                synchronize(&mut self.cursor, boundary);
                Statement::Expression(Expression::Invalid)
            }
        };
        if self.cursor.position() == start {
            // A stray closing delimiter no production would consume.
            self.cursor.advance();
        }
        stmt
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let NAME = VALUE [;]`
    fn parse_let(&mut self) -> Result<Statement, ParseError> {
        self.cursor.advance();
        let name = Identifier::new(self.cursor.expect(TokenKind::Ident)?.literal.clone());
        self.cursor.expect(TokenKind::Assign)?;
        let value = self.parse_expression(Precedence::Lowest)?;
        self.cursor.eat(TokenKind::Semicolon);
        Ok(Statement::Let { name, value })
    }

    /// `return VALUE [;]`
    fn parse_return(&mut self) -> Result<Statement, ParseError> {
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.cursor.eat(TokenKind::Semicolon);
        Ok(Statement::Return(value))
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.cursor.eat(TokenKind::Semicolon);
        Ok(Statement::Expression(expr))
    }

    /// `{ STMT... }`
    ///
    /// Runs until `}` or end of input; a block cut off by end of input is
    /// accepted as is.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        self.block_depth += 1;
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            statements.push(self.parse_statement_with_recovery());
        }
        self.block_depth -= 1;
        self.cursor.eat(TokenKind::RBrace);
        Ok(Block::new(statements))
    }
}
