//! Evaluation and macro-expansion errors.
//!
//! `EvalError` is the internal form of a Monkey `Error` object: evaluation
//! returns `Result<Object, EvalError>` and short-circuits with `?`, and the
//! public entry points turn the error into `Object::Error` carrying the
//! `Display` text. Construct errors through the `#[cold]` functions below
//! so the happy paths stay small.
//!
//! `MacroError` is separate: it reports a broken macro definition and is
//! never turned into a Monkey value.

use std::fmt::Write as _;

use monkey_ir::{InfixOp, PrefixOp};
use thiserror::Error;

use crate::object::ObjectType;

/// Result of evaluating a node.
pub type EvalResult = Result<crate::Object, EvalError>;

/// A runtime error raised by evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unknown operation: {op}{operand}")]
    PrefixTypeMismatch { op: PrefixOp, operand: ObjectType },

    #[error("unknown operation: {left} {op} {right}")]
    InfixTypeMismatch {
        left: ObjectType,
        op: InfixOp,
        right: ObjectType,
    },

    #[error("unknown operation: {target}[{index}]")]
    NotSubscriptable {
        target: ObjectType,
        index: ObjectType,
    },

    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("unusable as hash key: {0}")]
    UnusableHashKey(ObjectType),

    #[error("division by zero")]
    DivisionByZero,

    #[error("not a function: {0}")]
    NotCallable(ObjectType),

    #[error("invalid number of arguments: expected {expected}, but got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("invalid number of arguments to {name}: expected {expected}, but got {got}")]
    BuiltinArityMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("unknown operation: {name}({})", type_list(.args))]
    BuiltinTypeMismatch {
        name: &'static str,
        args: Vec<ObjectType>,
    },

    #[error("unquote: no literal form for {0}")]
    NoLiteralForm(ObjectType),

    #[error("invalid expression")]
    InvalidExpression,
}

fn type_list(types: &[ObjectType]) -> String {
    let mut out = String::new();
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{ty}");
    }
    out
}

// Operators

#[cold]
pub fn prefix_type_mismatch(op: PrefixOp, operand: ObjectType) -> EvalError {
    EvalError::PrefixTypeMismatch { op, operand }
}

#[cold]
pub fn infix_type_mismatch(left: ObjectType, op: InfixOp, right: ObjectType) -> EvalError {
    EvalError::InfixTypeMismatch { left, op, right }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

// Names and calls

#[cold]
pub fn unknown_identifier(name: &str) -> EvalError {
    EvalError::UnknownIdentifier(name.to_string())
}

#[cold]
pub fn not_callable(callee: ObjectType) -> EvalError {
    EvalError::NotCallable(callee)
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch { expected, got }
}

// Built-ins

#[cold]
pub fn builtin_arity_mismatch(name: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::BuiltinArityMismatch {
        name,
        expected,
        got,
    }
}

#[cold]
pub fn builtin_type_mismatch(name: &'static str, args: &[crate::Object]) -> EvalError {
    EvalError::BuiltinTypeMismatch {
        name,
        args: args.iter().map(crate::Object::type_of).collect(),
    }
}

// Collections

#[cold]
pub fn unusable_hash_key(key: ObjectType) -> EvalError {
    EvalError::UnusableHashKey(key)
}

#[cold]
pub fn not_subscriptable(target: ObjectType, index: ObjectType) -> EvalError {
    EvalError::NotSubscriptable { target, index }
}

// Quoting

#[cold]
pub fn no_literal_form(value: ObjectType) -> EvalError {
    EvalError::NoLiteralForm(value)
}

#[cold]
pub fn invalid_expression() -> EvalError {
    EvalError::InvalidExpression
}

/// A macro definition or call that cannot be expanded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MacroError {
    /// The macro body produced something other than a quote.
    #[error("macro {name} must return a quoted expression, got {got}")]
    NotQuote { name: String, got: ObjectType },

    #[error("invalid number of arguments to macro {name}: expected {expected}, but got {got}")]
    ArgumentCount {
        name: String,
        expected: usize,
        got: usize,
    },

    /// Evaluating the macro body raised an error.
    #[error("macro {name} failed: {source}")]
    Evaluation { name: String, source: EvalError },
}
