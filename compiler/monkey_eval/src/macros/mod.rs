//! Macro definition and expansion.
//!
//! Both passes run once per program, before evaluation:
//!
//! 1. [`Interpreter::define_macros`] moves every top-level
//!    `let NAME = macro(...) { ... };` into the macro environment and drops
//!    the statement from the program.
//! 2. [`Interpreter::expand_macros`] rewrites the program post-order. A call
//!    whose callee names a macro is replaced by the node the macro body
//!    returns, with the call arguments bound unevaluated as quotes.
//!
//! The macro environment is separate from the runtime environment, so
//! macros are invisible to evaluated code.


use std::rc::Rc;

use monkey_ir::rewrite::walk_expression;
use monkey_ir::{Expression, Program, Rewriter, Statement};
use tracing::debug;

use crate::environment::Environment;
use crate::errors::MacroError;
use crate::interpreter::Interpreter;
use crate::object::{Closure, Object};

impl Interpreter {
    /// Record top-level macro bindings in `macro_env` and remove them from
    /// the program.
    ///
    /// Only `let` statements whose value is a macro literal are moved;
    /// everything else is kept in order.
    pub fn define_macros(&self, program: Program, macro_env: &Environment) -> Program {
        let statements = program
            .statements
            .into_iter()
            .filter_map(|stmt| match stmt {
                Statement::Let {
                    name,
                    value: Expression::Macro(literal),
                } => {
                    debug!(name = name.as_str(), params = literal.parameters.len(), "define macro");
                    let closure = Closure::new(literal, macro_env.clone());
                    macro_env.set(name.0, Object::Macro(Rc::new(closure)));
                    None
                }
                other => Some(other),
            })
            .collect();
        Program::new(statements)
    }

    /// Expand every call to a macro defined in `macro_env`.
    ///
    /// Fails on the first macro that does not return a quote, takes the
    /// wrong number of arguments, or raises an error.
    pub fn expand_macros(
        &self,
        program: Program,
        macro_env: &Environment,
    ) -> Result<Program, MacroError> {
        let mut expander = MacroExpander {
            interpreter: self,
            env: macro_env,
            error: None,
        };
        let program = expander.rewrite_program(program);
        match expander.error {
            Some(err) => Err(err),
            None => Ok(program),
        }
    }

    fn apply_macro(
        &self,
        name: &str,
        closure: &Closure,
        arguments: Vec<Expression>,
    ) -> Result<Expression, MacroError> {
        if closure.arity() != arguments.len() {
            return Err(MacroError::ArgumentCount {
                name: name.to_string(),
                expected: closure.arity(),
                got: arguments.len(),
            });
        }
        debug!(name, args = arguments.len(), "expand macro");

        let env = Environment::new_child(&closure.env);
        for (param, arg) in closure.literal.parameters.iter().zip(arguments) {
            env.set(param.as_str(), Object::Quote(Rc::new(arg)));
        }

        let result = self
            .eval_block(&closure.literal.body, &env)
            .map_err(|source| MacroError::Evaluation {
                name: name.to_string(),
                source,
            })?;
        let result = match result {
            Object::Return(value) => *value,
            value => value,
        };
        match result {
            Object::Quote(node) => Ok(Rc::unwrap_or_clone(node)),
            other => Err(MacroError::NotQuote {
                name: name.to_string(),
                got: other.type_of(),
            }),
        }
    }
}

struct MacroExpander<'a> {
    interpreter: &'a Interpreter,
    env: &'a Environment,
    error: Option<MacroError>,
}

impl MacroExpander<'_> {
    /// The macro named by `callee`, if it is an identifier bound to one.
    fn lookup_macro(&self, callee: &Expression) -> Option<(String, Rc<Closure>)> {
        let Expression::Identifier(ident) = callee else {
            return None;
        };
        match self.env.get(ident.as_str()) {
            Some(Object::Macro(closure)) => Some((ident.0.clone(), closure)),
            _ => None,
        }
    }
}

impl Rewriter for MacroExpander<'_> {
    fn rewrite_expression(&mut self, expr: Expression) -> Expression {
        let expr = walk_expression(self, expr);
        if self.error.is_some() {
            return expr;
        }
        match expr {
            Expression::Call { callee, arguments } => match self.lookup_macro(&callee) {
                Some((name, closure)) => {
                    match self.interpreter.apply_macro(&name, &closure, arguments) {
                        Ok(expanded) => expanded,
                        Err(err) => {
                            self.error = Some(err);
                            Expression::Invalid
                        }
                    }
                }
                None => Expression::Call { callee, arguments },
            },
            other => other,
        }
    }
}
