//! `InterpreterBuilder` for configuring an `Interpreter`.

use super::Interpreter;
use crate::builtins::{Builtin, BuiltinRegistry};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for `Interpreter`.
///
/// Defaults: the standard built-ins and a stdout print handler.
pub struct InterpreterBuilder {
    builtins: BuiltinRegistry,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            builtins: BuiltinRegistry::standard(),
            print_handler: None,
        }
    }

    /// Send `puts` output to `handler`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Replace the whole built-in table.
    #[must_use]
    pub fn builtins(mut self, builtins: BuiltinRegistry) -> Self {
        self.builtins = builtins;
        self
    }

    /// Add (or override) one built-in.
    #[must_use]
    pub fn builtin(mut self, builtin: Builtin) -> Self {
        self.builtins.register(builtin);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            builtins: self.builtins,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
