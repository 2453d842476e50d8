//! Function application.

use monkey_stack::remaining_stack;
use tracing::trace;

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{arity_mismatch, not_callable, EvalResult};
use crate::object::Object;

impl Interpreter {
    /// Apply `callee` to already evaluated arguments.
    ///
    /// A user function runs its body in a fresh frame over its captured
    /// environment, and one `return` level is unwrapped. A built-in is
    /// called directly.
    #[tracing::instrument(level = "trace", skip_all, fields(callee = %callee.type_of(), args = args.len()))]
    pub(crate) fn apply_function(&self, callee: &Object, args: Vec<Object>) -> EvalResult {
        match callee {
            Object::Function(closure) => {
                let params = &closure.literal.parameters;
                if params.len() != args.len() {
                    return Err(arity_mismatch(params.len(), args.len()));
                }
                trace!(stack = ?remaining_stack(), "enter function");

                let call_env = Environment::new_child(&closure.env);
                for (param, arg) in params.iter().zip(args) {
                    call_env.set(param.as_str(), arg);
                }
                match self.eval_block(&closure.literal.body, &call_env)? {
                    Object::Return(value) => Ok(*value),
                    value => Ok(value),
                }
            }
            Object::Builtin(builtin) => {
                trace!(name = builtin.name, "call builtin");
                builtin.call(self, &args)
            }
            _ => Err(not_callable(callee.type_of())),
        }
    }
}
