//! Prefix and infix operator evaluation.
//!
//! Dispatch is a match on the operand types, with one helper per type
//! pair. Integer arithmetic wraps on overflow. `==` and `!=` on any pair
//! that is not two integers or two strings compare identity (see
//! [`identical`]).

use std::rc::Rc;

use monkey_ir::{InfixOp, PrefixOp};

use crate::errors::{division_by_zero, infix_type_mismatch, prefix_type_mismatch, EvalResult};
use crate::object::Object;

/// Evaluate `op operand`.
pub fn evaluate_prefix(op: PrefixOp, operand: &Object) -> EvalResult {
    match op {
        PrefixOp::Not => Ok(Object::Boolean(!operand.is_truthy())),
        PrefixOp::Neg => match operand {
            Object::Integer(value) => Ok(Object::Integer(value.wrapping_neg())),
            _ => Err(prefix_type_mismatch(op, operand.type_of())),
        },
    }
}

/// Evaluate `left op right`.
pub fn evaluate_infix(op: InfixOp, left: &Object, right: &Object) -> EvalResult {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_int_infix(op, *a, *b),
        (Object::String(a), Object::String(b)) => eval_string_infix(op, a, b, left, right),
        _ => match op {
            InfixOp::Eq => Ok(Object::Boolean(identical(left, right))),
            InfixOp::NotEq => Ok(Object::Boolean(!identical(left, right))),
            _ => Err(infix_type_mismatch(left.type_of(), op, right.type_of())),
        },
    }
}

fn eval_int_infix(op: InfixOp, a: i64, b: i64) -> EvalResult {
    let value = match op {
        InfixOp::Add => Object::Integer(a.wrapping_add(b)),
        InfixOp::Sub => Object::Integer(a.wrapping_sub(b)),
        InfixOp::Mul => Object::Integer(a.wrapping_mul(b)),
        InfixOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Object::Integer(a.wrapping_div(b))
        }
        InfixOp::Lt => Object::Boolean(a < b),
        InfixOp::Gt => Object::Boolean(a > b),
        InfixOp::Eq => Object::Boolean(a == b),
        InfixOp::NotEq => Object::Boolean(a != b),
    };
    Ok(value)
}

fn eval_string_infix(
    op: InfixOp,
    a: &Rc<str>,
    b: &Rc<str>,
    left: &Object,
    right: &Object,
) -> EvalResult {
    match op {
        InfixOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Object::string(joined))
        }
        _ => Err(infix_type_mismatch(left.type_of(), op, right.type_of())),
    }
}

/// Identity comparison used by the `==`/`!=` fallback.
///
/// `true`, `false` and `null` are identified by discriminant; heap values
/// by pointer; builtins by name. Values of different types are never
/// identical.
pub fn identical(left: &Object, right: &Object) -> bool {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => a == b,
        (Object::Boolean(a), Object::Boolean(b)) => a == b,
        (Object::Null, Object::Null) => true,
        (Object::String(a), Object::String(b)) | (Object::Error(a), Object::Error(b)) => {
            Rc::ptr_eq(a, b)
        }
        (Object::Array(a), Object::Array(b)) => Rc::ptr_eq(a, b),
        (Object::Hash(a), Object::Hash(b)) => Rc::ptr_eq(a, b),
        (Object::Function(a), Object::Function(b)) | (Object::Macro(a), Object::Macro(b)) => {
            Rc::ptr_eq(a, b)
        }
        (Object::Quote(a), Object::Quote(b)) => Rc::ptr_eq(a, b),
        (Object::Builtin(a), Object::Builtin(b)) => a.name == b.name,
        (Object::Return(a), Object::Return(b)) => identical(a, b),
        _ => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::errors::EvalError;

    fn int(value: i64) -> Object {
        Object::Integer(value)
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(evaluate_infix(InfixOp::Add, &int(2), &int(3)), Ok(int(5)));
        assert_eq!(evaluate_infix(InfixOp::Sub, &int(2), &int(3)), Ok(int(-1)));
        assert_eq!(evaluate_infix(InfixOp::Mul, &int(4), &int(3)), Ok(int(12)));
        assert_eq!(evaluate_infix(InfixOp::Div, &int(7), &int(2)), Ok(int(3)));
        assert_eq!(evaluate_infix(InfixOp::Div, &int(-7), &int(2)), Ok(int(-3)));
    }

    #[test]
    fn test_integer_comparison() {
        let t = Object::Boolean(true);
        let f = Object::Boolean(false);
        assert_eq!(evaluate_infix(InfixOp::Lt, &int(1), &int(2)), Ok(t.clone()));
        assert_eq!(evaluate_infix(InfixOp::Gt, &int(1), &int(2)), Ok(f.clone()));
        assert_eq!(evaluate_infix(InfixOp::Eq, &int(2), &int(2)), Ok(t.clone()));
        assert_eq!(evaluate_infix(InfixOp::NotEq, &int(2), &int(2)), Ok(f));
        assert_eq!(evaluate_infix(InfixOp::NotEq, &int(1), &int(2)), Ok(t));
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(
            evaluate_infix(InfixOp::Add, &int(i64::MAX), &int(1)),
            Ok(int(i64::MIN))
        );
        assert_eq!(
            evaluate_infix(InfixOp::Div, &int(i64::MIN), &int(-1)),
            Ok(int(i64::MIN))
        );
        assert_eq!(evaluate_prefix(PrefixOp::Neg, &int(i64::MIN)), Ok(int(i64::MIN)));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate_infix(InfixOp::Div, &int(1), &int(0)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_string_concatenation_only() {
        let a = Object::from("foo");
        let b = Object::from("bar");
        assert_eq!(evaluate_infix(InfixOp::Add, &a, &b), Ok(Object::from("foobar")));

        let err = evaluate_infix(InfixOp::Sub, &a, &b).unwrap_err();
        assert_eq!(err.to_string(), "unknown operation: String - String");
        let err = evaluate_infix(InfixOp::Eq, &a, &b).unwrap_err();
        assert_eq!(err.to_string(), "unknown operation: String == String");
    }

    #[test]
    fn test_type_mismatch_messages() {
        let err = evaluate_infix(InfixOp::Add, &int(5), &Object::Boolean(true)).unwrap_err();
        assert_eq!(err.to_string(), "unknown operation: Integer + Boolean");

        let err = evaluate_infix(InfixOp::Add, &Object::Boolean(true), &Object::Boolean(false))
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown operation: Boolean + Boolean");

        let err = evaluate_prefix(PrefixOp::Neg, &Object::Boolean(true)).unwrap_err();
        assert_eq!(err.to_string(), "unknown operation: -Boolean");
    }

    #[test]
    fn test_bang_uses_truthiness() {
        assert_eq!(evaluate_prefix(PrefixOp::Not, &int(5)), Ok(Object::Boolean(false)));
        assert_eq!(evaluate_prefix(PrefixOp::Not, &Object::Null), Ok(Object::Boolean(true)));
        assert_eq!(
            evaluate_prefix(PrefixOp::Not, &Object::Boolean(false)),
            Ok(Object::Boolean(true))
        );
        assert_eq!(
            evaluate_prefix(PrefixOp::Not, &Object::from("")),
            Ok(Object::Boolean(false))
        );
    }

    #[test]
    fn test_identity_fallback() {
        let t = Object::Boolean(true);
        let null = Object::Null;
        assert_eq!(evaluate_infix(InfixOp::Eq, &t, &Object::Boolean(true)), Ok(t.clone()));
        assert_eq!(evaluate_infix(InfixOp::Eq, &null, &Object::Null), Ok(t.clone()));
        assert_eq!(
            evaluate_infix(InfixOp::Eq, &int(1), &t),
            Ok(Object::Boolean(false))
        );
        assert_eq!(evaluate_infix(InfixOp::NotEq, &int(1), &null), Ok(t));
    }

    #[test]
    fn test_heap_values_compare_by_pointer() {
        let a = Object::array(vec![int(1)]);
        let same = a.clone();
        let twin = Object::array(vec![int(1)]);
        assert!(identical(&a, &same));
        assert!(!identical(&a, &twin));
    }
}
