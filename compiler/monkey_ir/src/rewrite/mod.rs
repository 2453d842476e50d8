//! Generic AST rewrite.
//!
//! One recursive transform over the closed node set, shared by
//! `quote`/`unquote` evaluation and macro expansion.
//!
//! # Design
//!
//! A single `Rewriter` trait is provided. Each `rewrite_*` method receives a
//! node by value and returns its replacement. Default implementations call the
//! matching `walk_*` function, which rewrites every child and rebuilds the
//! node. Override `rewrite_*` and call `walk_*` first to get post-order
//! behaviour (children are rewritten before the node itself is inspected).
//!
//! The `walk_*` functions match exhaustively. Every expression-holding field
//! is rewritten on its own: both infix operands, every hash key and value,
//! subscript target and index, call callee and arguments, function and macro
//! parameters and bodies.
//!
//! # Example
//!
//! ```text
//! struct TurnOneIntoTwo;
//!
//! impl Rewriter for TurnOneIntoTwo {
//!     fn rewrite_expression(&mut self, expr: Expression) -> Expression {
//!         match walk_expression(self, expr) {
//!             Expression::Integer(1) => Expression::Integer(2),
//!             other => other,
//!         }
//!     }
//! }
//! ```

#[cfg(test)]
mod tests;

use std::rc::Rc;

use crate::ast::{Block, Expression, FunctionLiteral, Identifier, Program, Statement};

/// AST rewriter trait.
///
/// Override `rewrite_*` methods to replace nodes; call `walk_*` functions to
/// continue into children.
pub trait Rewriter {
    fn rewrite_program(&mut self, program: Program) -> Program {
        walk_program(self, program)
    }

    fn rewrite_statement(&mut self, stmt: Statement) -> Statement {
        walk_statement(self, stmt)
    }

    fn rewrite_block(&mut self, block: Block) -> Block {
        walk_block(self, block)
    }

    fn rewrite_expression(&mut self, expr: Expression) -> Expression {
        walk_expression(self, expr)
    }

    /// Rewrite a parameter name.
    ///
    /// The default passes the parameter through `rewrite_expression` as an
    /// identifier expression and keeps the result only if it is still an
    /// identifier.
    fn rewrite_parameter(&mut self, param: Identifier) -> Identifier {
        match self.rewrite_expression(Expression::Identifier(param.clone())) {
            Expression::Identifier(rewritten) => rewritten,
            _ => param,
        }
    }
}

pub fn walk_program<R: Rewriter + ?Sized>(rewriter: &mut R, program: Program) -> Program {
    Program {
        statements: walk_statements(rewriter, program.statements),
    }
}

pub fn walk_block<R: Rewriter + ?Sized>(rewriter: &mut R, block: Block) -> Block {
    Block {
        statements: walk_statements(rewriter, block.statements),
    }
}

fn walk_statements<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    statements: Vec<Statement>,
) -> Vec<Statement> {
    statements
        .into_iter()
        .map(|stmt| rewriter.rewrite_statement(stmt))
        .collect()
}

pub fn walk_statement<R: Rewriter + ?Sized>(rewriter: &mut R, stmt: Statement) -> Statement {
    match stmt {
        Statement::Let { name, value } => Statement::Let {
            name,
            value: rewriter.rewrite_expression(value),
        },
        Statement::Return(value) => Statement::Return(rewriter.rewrite_expression(value)),
        Statement::Expression(expr) => Statement::Expression(rewriter.rewrite_expression(expr)),
        Statement::Block(block) => Statement::Block(rewriter.rewrite_block(block)),
    }
}

fn walk_boxed<R: Rewriter + ?Sized>(rewriter: &mut R, expr: Box<Expression>) -> Box<Expression> {
    Box::new(rewriter.rewrite_expression(*expr))
}

fn walk_expressions<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    exprs: Vec<Expression>,
) -> Vec<Expression> {
    exprs
        .into_iter()
        .map(|expr| rewriter.rewrite_expression(expr))
        .collect()
}

fn walk_function_literal<R: Rewriter + ?Sized>(
    rewriter: &mut R,
    literal: Rc<FunctionLiteral>,
) -> Rc<FunctionLiteral> {
    let FunctionLiteral { parameters, body } = Rc::unwrap_or_clone(literal);
    let parameters = parameters
        .into_iter()
        .map(|param| rewriter.rewrite_parameter(param))
        .collect();
    let body = rewriter.rewrite_block(body);
    Rc::new(FunctionLiteral { parameters, body })
}

pub fn walk_expression<R: Rewriter + ?Sized>(rewriter: &mut R, expr: Expression) -> Expression {
    match expr {
        Expression::Identifier(_)
        | Expression::Integer(_)
        | Expression::Boolean(_)
        | Expression::String(_)
        | Expression::Invalid => expr,
        Expression::Prefix { op, operand } => Expression::Prefix {
            op,
            operand: walk_boxed(rewriter, operand),
        },
        Expression::Infix { op, left, right } => {
            let left = walk_boxed(rewriter, left);
            let right = walk_boxed(rewriter, right);
            Expression::Infix { op, left, right }
        }
        Expression::If {
            condition,
            consequence,
            alternative,
        } => Expression::If {
            condition: walk_boxed(rewriter, condition),
            consequence: rewriter.rewrite_block(consequence),
            alternative: alternative.map(|block| rewriter.rewrite_block(block)),
        },
        Expression::Function(literal) => {
            Expression::Function(walk_function_literal(rewriter, literal))
        }
        Expression::Macro(literal) => Expression::Macro(walk_function_literal(rewriter, literal)),
        Expression::Call { callee, arguments } => Expression::Call {
            callee: walk_boxed(rewriter, callee),
            arguments: walk_expressions(rewriter, arguments),
        },
        Expression::Array(elements) => Expression::Array(walk_expressions(rewriter, elements)),
        Expression::Hash(pairs) => Expression::Hash(
            pairs
                .into_iter()
                .map(|(key, value)| {
                    let key = rewriter.rewrite_expression(key);
                    let value = rewriter.rewrite_expression(value);
                    (key, value)
                })
                .collect(),
        ),
        Expression::Subscript { target, index } => {
            let target = walk_boxed(rewriter, target);
            let index = walk_boxed(rewriter, index);
            Expression::Subscript { target, index }
        }
    }
}

/// Adapter that applies a closure to every expression, post-order.
struct ExpressionFn<F>(F);

impl<F: FnMut(Expression) -> Expression> Rewriter for ExpressionFn<F> {
    fn rewrite_expression(&mut self, expr: Expression) -> Expression {
        let expr = walk_expression(self, expr);
        (self.0)(expr)
    }
}

/// Rewrite every expression in `program` with `f`, children first.
pub fn modify_program(program: Program, f: impl FnMut(Expression) -> Expression) -> Program {
    ExpressionFn(f).rewrite_program(program)
}

/// Rewrite `expr` and every expression beneath it with `f`, children first.
pub fn modify_expression(expr: Expression, f: impl FnMut(Expression) -> Expression) -> Expression {
    ExpressionFn(f).rewrite_expression(expr)
}
