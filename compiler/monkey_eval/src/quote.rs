//! `quote` and `unquote`.
//!
//! `quote(EXPR)` does not evaluate `EXPR`. It walks the tree post-order,
//! evaluates the argument of every nested `unquote(INNER)` in the current
//! environment, converts the value back into a literal node, and splices
//! that node in place of the `unquote` call. The resulting tree is wrapped
//! in `Object::Quote`.

use std::rc::Rc;

use monkey_ir::rewrite::walk_expression;
use monkey_ir::{Expression, Rewriter};

use crate::environment::Environment;
use crate::errors::{no_literal_form, EvalError, EvalResult};
use crate::interpreter::Interpreter;
use crate::object::Object;

impl Interpreter {
    pub(crate) fn eval_quote(&self, expr: &Expression, env: &Environment) -> EvalResult {
        let mut unquoter = Unquoter {
            interpreter: self,
            env,
            error: None,
        };
        let node = unquoter.rewrite_expression(expr.clone());
        match unquoter.error {
            Some(err) => Err(err),
            None => Ok(Object::Quote(Rc::new(node))),
        }
    }
}

/// Replaces `unquote(...)` calls with the literal form of their value.
///
/// Stops evaluating after the first error; the rest of the tree is left
/// as is and discarded by the caller.
struct Unquoter<'a> {
    interpreter: &'a Interpreter,
    env: &'a Environment,
    error: Option<EvalError>,
}

impl Rewriter for Unquoter<'_> {
    fn rewrite_expression(&mut self, expr: Expression) -> Expression {
        let expr = walk_expression(self, expr);
        if self.error.is_some() {
            return expr;
        }
        let Some(inner) = expr.as_unary_call_to("unquote") else {
            return expr;
        };
        let spliced = self
            .interpreter
            .eval_expression(inner, self.env)
            .and_then(|value| object_to_expression(&value));
        match spliced {
            Ok(node) => node,
            Err(err) => {
                self.error = Some(err);
                expr
            }
        }
    }
}

/// The literal node that evaluates back to `value`.
///
/// Quotes splice their wrapped node. Values without a literal form
/// (functions, built-ins, `null`, ...) are an error.
pub fn object_to_expression(value: &Object) -> Result<Expression, EvalError> {
    match value {
        Object::Integer(value) => Ok(Expression::Integer(*value)),
        Object::Boolean(value) => Ok(Expression::Boolean(*value)),
        Object::String(value) => Ok(Expression::String(value.to_string())),
        Object::Array(elements) => elements
            .iter()
            .map(object_to_expression)
            .collect::<Result<Vec<_>, _>>()
            .map(Expression::Array),
        Object::Hash(hash) => hash
            .pairs()
            .map(|pair| Ok((object_to_expression(&pair.key)?, object_to_expression(&pair.value)?)))
            .collect::<Result<Vec<_>, EvalError>>()
            .map(Expression::Hash),
        Object::Quote(node) => Ok((**node).clone()),
        Object::Function(_)
        | Object::Builtin(_)
        | Object::Null
        | Object::Error(_)
        | Object::Return(_)
        | Object::Macro(_) => Err(no_literal_form(value.type_of())),
    }
}
