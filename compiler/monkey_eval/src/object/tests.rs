#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::rc::Rc;

use monkey_ir::{Block, Expression, FunctionLiteral, Identifier, InfixOp, Statement};
use pretty_assertions::assert_eq;

use super::*;
use crate::builtins::BuiltinRegistry;
use crate::environment::Environment;

fn closure(params: &[&str], body: Expression) -> Rc<Closure> {
    let literal = FunctionLiteral {
        parameters: params.iter().map(|p| Identifier::new(*p)).collect(),
        body: Block::new(vec![Statement::Expression(body)]),
    };
    Rc::new(Closure::new(Rc::new(literal), Environment::new_root()))
}

#[test]
fn test_type_names() {
    assert_eq!(Object::Integer(1).type_of().to_string(), "Integer");
    assert_eq!(Object::Boolean(true).type_of().to_string(), "Boolean");
    assert_eq!(Object::from("x").type_of().to_string(), "String");
    assert_eq!(Object::array(vec![]).type_of().to_string(), "Array");
    assert_eq!(Object::Null.type_of().to_string(), "Null");
    assert_eq!(
        Object::Return(Box::new(Object::Null)).type_of().to_string(),
        "Return"
    );
    assert_eq!(
        Object::Quote(Rc::new(Expression::Integer(1)))
            .type_of()
            .to_string(),
        "Quote"
    );
}

#[test]
fn test_truthiness() {
    assert!(Object::Integer(0).is_truthy());
    assert!(Object::from("").is_truthy());
    assert!(Object::array(vec![]).is_truthy());
    assert!(Object::Boolean(true).is_truthy());
    assert!(!Object::Boolean(false).is_truthy());
    assert!(!Object::Null.is_truthy());
}

#[test]
fn test_inspect_scalars() {
    assert_eq!(Object::Integer(-42).inspect(), "-42");
    assert_eq!(Object::Boolean(false).inspect(), "false");
    assert_eq!(Object::from("hello world").inspect(), "hello world");
    assert_eq!(Object::Null.inspect(), "null");
    assert_eq!(Object::error("boom").inspect(), "Error: boom");
    assert_eq!(Object::Return(Box::new(Object::Integer(7))).inspect(), "7");
}

#[test]
fn test_inspect_collections() {
    let array = Object::array(vec![
        Object::Integer(1),
        Object::from("two"),
        Object::array(vec![Object::Boolean(true)]),
    ]);
    assert_eq!(array.inspect(), "[1, two, [true]]");

    let mut hash = HashObject::default();
    hash.insert(HashKey::Integer(1), Object::Integer(1), Object::from("one"));
    hash.insert(
        HashKey::String(Rc::from("k")),
        Object::from("k"),
        Object::Null,
    );
    assert_eq!(Object::Hash(Rc::new(hash)).inspect(), "{1: one, k: null}");
}

#[test]
fn test_inspect_callables() {
    let body = Expression::infix(InfixOp::Add, Expression::ident("x"), Expression::ident("y"));
    assert_eq!(
        Object::Function(closure(&["x", "y"], body.clone())).inspect(),
        "fn(x, y) { (x + y) }"
    );
    assert_eq!(
        Object::Macro(closure(&["x"], body)).inspect(),
        "macro(x) { (x + y) }"
    );

    let len = BuiltinRegistry::standard().get("len").unwrap();
    assert_eq!(Object::Builtin(len).inspect(), "builtin function");
}

#[test]
fn test_inspect_quote() {
    let node = Expression::infix(InfixOp::Add, Expression::Integer(1), Expression::ident("a"));
    assert_eq!(Object::Quote(Rc::new(node)).inspect(), "QUOTE((1 + a))");
}

#[test]
fn test_hash_keys_follow_content() {
    let a = Object::from("name");
    let b = Object::string(String::from("na") + "me");
    assert_eq!(a.hash_key(), b.hash_key());
    assert_ne!(Object::from("1").hash_key(), Object::Integer(1).hash_key());
    assert_ne!(Object::Integer(1).hash_key(), Object::Boolean(true).hash_key());
    assert_eq!(
        Object::Boolean(true).hash_key(),
        Some(HashKey::Boolean(true))
    );
}

#[test]
fn test_unhashable_values() {
    assert_eq!(Object::array(vec![]).hash_key(), None);
    assert_eq!(Object::Null.hash_key(), None);
    assert_eq!(Object::Hash(Rc::new(HashObject::default())).hash_key(), None);
    assert_eq!(Object::Function(closure(&[], Expression::Integer(1))).hash_key(), None);
}

#[test]
fn test_hash_insert_keeps_order_and_replaces() {
    let mut hash = HashObject::default();
    hash.insert(HashKey::Integer(2), Object::Integer(2), Object::from("b"));
    hash.insert(HashKey::Integer(1), Object::Integer(1), Object::from("a"));
    hash.insert(HashKey::Integer(2), Object::Integer(2), Object::from("B"));

    assert_eq!(hash.pairs().count(), 2);
    let values: Vec<String> = hash.pairs().map(|p| p.value.inspect()).collect();
    assert_eq!(values, vec!["B", "a"]);
    assert_eq!(
        hash.get(&HashKey::Integer(1)).unwrap().value,
        Object::from("a")
    );
    assert!(hash.get(&HashKey::Integer(3)).is_none());
}

#[test]
fn test_structural_equality() {
    assert_eq!(
        Object::array(vec![Object::Integer(1)]),
        Object::array(vec![Object::Integer(1)])
    );
    assert_ne!(Object::Integer(1), Object::Boolean(true));

    let f = closure(&["x"], Expression::ident("x"));
    let g = closure(&["x"], Expression::ident("x"));
    assert_eq!(Object::Function(Rc::clone(&f)), Object::Function(Rc::clone(&f)));
    assert_ne!(Object::Function(f), Object::Function(g));
}

#[test]
fn test_debug_of_self_referencing_closure_terminates() {
    let env = Environment::new_root();
    let literal = FunctionLiteral {
        parameters: vec![],
        body: Block::default(),
    };
    let function = Object::Function(Rc::new(Closure::new(Rc::new(literal), env.clone())));
    env.set("f", function.clone());

    let rendered = format!("{function:?}");
    assert!(rendered.starts_with("Function(Closure"));
}
