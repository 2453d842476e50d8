use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;
use crate::ast::InfixOp;
use crate::PrefixOp;

fn one() -> Expression {
    Expression::Integer(1)
}

fn two() -> Expression {
    Expression::Integer(2)
}

fn one_into_two(expr: Expression) -> Expression {
    match expr {
        Expression::Integer(1) => two(),
        other => other,
    }
}

fn block_of(expr: Expression) -> Block {
    Block::new(vec![Statement::Expression(expr)])
}

#[test]
fn test_modify_rewrites_every_position() {
    let cases = vec![
        (one(), two()),
        (
            Expression::infix(InfixOp::Add, one(), two()),
            Expression::infix(InfixOp::Add, two(), two()),
        ),
        (
            Expression::infix(InfixOp::Add, two(), one()),
            Expression::infix(InfixOp::Add, two(), two()),
        ),
        (
            Expression::prefix(PrefixOp::Neg, one()),
            Expression::prefix(PrefixOp::Neg, two()),
        ),
        (
            Expression::Subscript {
                target: Box::new(one()),
                index: Box::new(one()),
            },
            Expression::Subscript {
                target: Box::new(two()),
                index: Box::new(two()),
            },
        ),
        (
            Expression::If {
                condition: Box::new(one()),
                consequence: block_of(one()),
                alternative: Some(block_of(one())),
            },
            Expression::If {
                condition: Box::new(two()),
                consequence: block_of(two()),
                alternative: Some(block_of(two())),
            },
        ),
        (
            Expression::Array(vec![one(), one()]),
            Expression::Array(vec![two(), two()]),
        ),
        (
            Expression::Hash(vec![(one(), one()), (one(), one())]),
            Expression::Hash(vec![(two(), two()), (two(), two())]),
        ),
        (
            Expression::call(Expression::ident("f"), vec![one(), one()]),
            Expression::call(Expression::ident("f"), vec![two(), two()]),
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(modify_expression(input, one_into_two), expected);
    }
}

#[test]
fn test_infix_operands_rewrite_independently() {
    let three = || Expression::Integer(3);

    let rewritten = modify_expression(
        Expression::infix(InfixOp::Add, one(), three()),
        one_into_two,
    );
    assert_eq!(rewritten, Expression::infix(InfixOp::Add, two(), three()));
    assert_eq!(rewritten.to_string(), "(2 + 3)");

    let rewritten = modify_expression(
        Expression::infix(InfixOp::Sub, three(), one()),
        one_into_two,
    );
    assert_eq!(rewritten.to_string(), "(3 - 2)");

    let rewritten = modify_expression(
        Expression::Subscript {
            target: Box::new(three()),
            index: Box::new(one()),
        },
        one_into_two,
    );
    assert_eq!(rewritten.to_string(), "(3[2])");
}

#[test]
fn test_modify_program_statements() {
    let program = Program::new(vec![
        Statement::Let {
            name: Identifier::new("x"),
            value: one(),
        },
        Statement::Return(one()),
        Statement::Expression(one()),
        Statement::Block(block_of(one())),
    ]);
    let expected = Program::new(vec![
        Statement::Let {
            name: Identifier::new("x"),
            value: two(),
        },
        Statement::Return(two()),
        Statement::Expression(two()),
        Statement::Block(block_of(two())),
    ]);
    assert_eq!(modify_program(program, one_into_two), expected);
}

#[test]
fn test_modify_function_and_macro_bodies() {
    let literal = |value: Expression| {
        Rc::new(FunctionLiteral {
            parameters: vec![Identifier::new("x")],
            body: block_of(value),
        })
    };

    let function = Expression::Function(literal(one()));
    assert_eq!(
        modify_expression(function, one_into_two),
        Expression::Function(literal(two()))
    );

    let macro_literal = Expression::Macro(literal(one()));
    assert_eq!(
        modify_expression(macro_literal, one_into_two),
        Expression::Macro(literal(two()))
    );
}

#[test]
fn test_modify_parameters_keep_identifiers() {
    let function = Expression::Function(Rc::new(FunctionLiteral {
        parameters: vec![Identifier::new("a"), Identifier::new("b")],
        body: Block::default(),
    }));

    let renamed = modify_expression(function.clone(), |expr| match expr {
        Expression::Identifier(ident) if ident.as_str() == "a" => Expression::ident("z"),
        other => other,
    });
    let Expression::Function(literal) = renamed else {
        panic!("expected function literal");
    };
    assert_eq!(
        literal.parameters,
        vec![Identifier::new("z"), Identifier::new("b")]
    );

    // A non-identifier replacement leaves the parameter untouched.
    let unchanged = modify_expression(function.clone(), |expr| match expr {
        Expression::Identifier(_) => one(),
        other => other,
    });
    assert_eq!(unchanged, function);
}

#[test]
fn test_post_order_sees_rewritten_children() {
    // Children are rewritten first, so the parent sees `(2 + 2)`.
    let mut parents = Vec::new();
    let expr = Expression::infix(InfixOp::Add, one(), one());
    modify_expression(expr, |expr| {
        let expr = one_into_two(expr);
        if matches!(expr, Expression::Infix { .. }) {
            parents.push(expr.to_string());
        }
        expr
    });
    assert_eq!(parents, vec!["(2 + 2)".to_string()]);
}

#[test]
fn test_custom_rewriter_can_skip_subtrees() {
    struct SkipCalls;

    impl Rewriter for SkipCalls {
        fn rewrite_expression(&mut self, expr: Expression) -> Expression {
            match expr {
                Expression::Call { .. } => expr,
                other => one_into_two(walk_expression(self, other)),
            }
        }
    }

    let expr = Expression::Array(vec![
        one(),
        Expression::call(Expression::ident("quote"), vec![one()]),
    ]);
    let rewritten = SkipCalls.rewrite_expression(expr);
    assert_eq!(
        rewritten,
        Expression::Array(vec![
            two(),
            Expression::call(Expression::ident("quote"), vec![one()]),
        ])
    );
}
