//! Node dispatch.

use std::rc::Rc;

use monkey_ir::{Block, Expression, Program, Statement};
use monkey_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{
    invalid_expression, not_subscriptable, unknown_identifier, unusable_hash_key, EvalError,
    EvalResult,
};
use crate::object::{Closure, HashObject, Object};
use crate::operators::{evaluate_infix, evaluate_prefix};

impl Interpreter {
    /// Run statements in order, stopping at the first `return`, whose
    /// value is unwrapped.
    pub(crate) fn eval_program_inner(&self, program: &Program, env: &Environment) -> EvalResult {
        let mut result = Object::Null;
        for stmt in &program.statements {
            match self.eval_statement(stmt, env)? {
                Object::Return(value) => return Ok(*value),
                value => result = value,
            }
        }
        Ok(result)
    }

    /// Run statements in order, stopping at the first `return`. The
    /// `Return` wrapper is passed up unchanged.
    pub(crate) fn eval_block(&self, block: &Block, env: &Environment) -> EvalResult {
        let mut result = Object::Null;
        for stmt in &block.statements {
            let value = self.eval_statement(stmt, env)?;
            if matches!(value, Object::Return(_)) {
                return Ok(value);
            }
            result = value;
        }
        Ok(result)
    }

    pub(crate) fn eval_statement(&self, stmt: &Statement, env: &Environment) -> EvalResult {
        match stmt {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.set(name.as_str(), value.clone());
                Ok(value)
            }
            Statement::Return(value) => {
                let value = self.eval_expression(value, env)?;
                Ok(Object::Return(Box::new(value)))
            }
            Statement::Expression(expr) => self.eval_expression(expr, env),
            Statement::Block(block) => self.eval_block(block, env),
        }
    }

    /// Evaluate an expression, growing the stack first if needed.
    pub(crate) fn eval_expression(&self, expr: &Expression, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
    }

    fn eval_expression_inner(&self, expr: &Expression, env: &Environment) -> EvalResult {
        match expr {
            Expression::Identifier(ident) => self.eval_identifier(ident.as_str(), env),
            Expression::Integer(value) => Ok(Object::Integer(*value)),
            Expression::Boolean(value) => Ok(Object::Boolean(*value)),
            Expression::String(value) => Ok(Object::string(value.as_str())),
            Expression::Prefix { op, operand } => {
                let operand = self.eval_expression(operand, env)?;
                evaluate_prefix(*op, &operand)
            }
            Expression::Infix { op, left, right } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                evaluate_infix(*op, &left, &right)
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                if self.eval_expression(condition, env)?.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Object::Null)
                }
            }
            Expression::Function(literal) => Ok(Object::Function(Rc::new(Closure::new(
                Rc::clone(literal),
                env.clone(),
            )))),
            Expression::Macro(literal) => Ok(Object::Macro(Rc::new(Closure::new(
                Rc::clone(literal),
                env.clone(),
            )))),
            Expression::Call { callee, arguments } => {
                if let Some(quoted) = expr.as_unary_call_to("quote") {
                    return self.eval_quote(quoted, env);
                }
                let callee = self.eval_expression(callee, env)?;
                let args = self.eval_expressions(arguments, env)?;
                self.apply_function(&callee, args)
            }
            Expression::Array(elements) => {
                Ok(Object::Array(Rc::new(self.eval_expressions(elements, env)?)))
            }
            Expression::Hash(pairs) => self.eval_hash_literal(pairs, env),
            Expression::Subscript { target, index } => {
                let target = self.eval_expression(target, env)?;
                let index = self.eval_expression(index, env)?;
                eval_subscript(&target, &index)
            }
            Expression::Invalid => Err(invalid_expression()),
        }
    }

    /// Environment chain first, then built-ins.
    fn eval_identifier(&self, name: &str, env: &Environment) -> EvalResult {
        if let Some(value) = env.get(name) {
            return Ok(value);
        }
        match self.builtins.get(name) {
            Some(builtin) => Ok(Object::Builtin(builtin)),
            None => Err(unknown_identifier(name)),
        }
    }

    /// Evaluate left to right, stopping at the first error.
    pub(crate) fn eval_expressions(
        &self,
        exprs: &[Expression],
        env: &Environment,
    ) -> Result<Vec<Object>, EvalError> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env))
            .collect()
    }

    fn eval_hash_literal(
        &self,
        pairs: &[(Expression, Expression)],
        env: &Environment,
    ) -> EvalResult {
        let mut hash = HashObject::with_capacity(pairs.len());
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr, env)?;
            let hash_key = key
                .hash_key()
                .ok_or_else(|| unusable_hash_key(key.type_of()))?;
            let value = self.eval_expression(value_expr, env)?;
            hash.insert(hash_key, key, value);
        }
        Ok(Object::Hash(Rc::new(hash)))
    }
}

/// `target[index]`. Out-of-range array indices and missing hash keys give
/// `null`.
fn eval_subscript(target: &Object, index: &Object) -> EvalResult {
    match (target, index) {
        (Object::Array(elements), Object::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Object::Null)),
        (Object::Hash(hash), _) => {
            let key = index
                .hash_key()
                .ok_or_else(|| unusable_hash_key(index.type_of()))?;
            Ok(hash
                .get(&key)
                .map_or(Object::Null, |pair| pair.value.clone()))
        }
        _ => Err(not_subscriptable(target.type_of(), index.type_of())),
    }
}
