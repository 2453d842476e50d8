//! Tree-walking interpreter.
//!
//! `Interpreter` is the evaluation context: it owns the built-in registry
//! and the print handler, and all evaluation goes through it. Environments
//! are passed in by the caller, so one interpreter can serve many
//! independent programs or one long-lived REPL session.
//!
//! Internally every node evaluates to an [`EvalResult`]; errors short-circuit
//! with `?`. The public `eval*` methods convert an error into a Monkey
//! `Error` object at the boundary.

mod builder;
mod eval;
mod function_call;


pub use builder::InterpreterBuilder;

use monkey_ir::{Node, Program};

use crate::builtins::BuiltinRegistry;
use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::object::Object;
use crate::print_handler::SharedPrintHandler;

/// Evaluation context for Monkey programs.
pub struct Interpreter {
    builtins: BuiltinRegistry,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter with the standard built-ins printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    #[inline]
    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate any node in `env`.
    ///
    /// A program unwraps a top-level `return`; a statement or block that
    /// returns yields the `Return` wrapper. Errors come back as
    /// `Object::Error`.
    pub fn eval<'a>(&self, node: impl Into<Node<'a>>, env: &Environment) -> Object {
        let result = match node.into() {
            Node::Program(program) => self.eval_program_inner(program, env),
            Node::Statement(stmt) => self.eval_statement(stmt, env),
            Node::Block(block) => self.eval_block(block, env),
            Node::Expression(expr) => self.eval_expression(expr, env),
        };
        into_object(result)
    }

    /// Evaluate a whole program in `env`.
    ///
    /// The value is that of the last statement, or of the first `return`.
    /// An empty program evaluates to `null`.
    pub fn eval_program(&self, program: &Program, env: &Environment) -> Object {
        into_object(self.eval_program_inner(program, env))
    }

    /// Like [`Interpreter::eval_program`], but keeps the error typed.
    pub fn try_eval_program(&self, program: &Program, env: &Environment) -> EvalResult {
        self.eval_program_inner(program, env)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn into_object(result: EvalResult) -> Object {
    result.unwrap_or_else(|err| Object::error(err.to_string()))
}
