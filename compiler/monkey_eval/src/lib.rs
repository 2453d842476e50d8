//! Evaluator for Monkey.
//!
//! This crate provides:
//! - The runtime value model ([`Object`], [`HashObject`], [`Closure`])
//! - Scope chains ([`Environment`])
//! - The tree-walking [`Interpreter`] with its built-in registry and print handler
//! - `quote`/`unquote` and macro definition/expansion
//!
//! # Example
//!
//! ```text
//! let interpreter = Interpreter::new();
//! let env = Environment::new_root();
//! let program = interpreter.define_macros(program, &macro_env);
//! let program = interpreter.expand_macros(program, &macro_env)?;
//! let value = interpreter.eval_program(&program, &env);
//! println!("{}", value.inspect());
//! ```

pub mod builtins;
pub mod environment;
pub mod errors;
pub mod interpreter;
mod macros;
pub mod object;
pub mod operators;
pub mod print_handler;
mod quote;

pub use builtins::{Builtin, BuiltinFn, BuiltinRegistry};
pub use environment::Environment;
pub use errors::{EvalError, EvalResult, MacroError};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use object::{Closure, HashKey, HashObject, HashPair, Object, ObjectType};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use quote::object_to_expression;
