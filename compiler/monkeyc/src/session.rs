//! Source-to-result pipeline shared by the REPL and `run`.

use monkey_eval::{Environment, Interpreter, MacroError, Object, SharedPrintHandler};
use tracing::debug;

/// State carried across inputs: one runtime environment and one macro
/// environment, so bindings and macros from earlier REPL lines stay
/// visible.
pub struct Session {
    interpreter: Interpreter,
    env: Environment,
    macro_env: Environment,
}

/// What running one input produced.
#[derive(Debug)]
pub enum Outcome {
    /// Nothing left to evaluate (empty input or only macro definitions).
    Empty,
    /// The value of the program. Evaluation errors arrive here as
    /// `Object::Error`.
    Value(Object),
    /// Parser diagnostics; nothing was evaluated.
    ParseErrors(Vec<String>),
    /// A macro could not be expanded; nothing was evaluated.
    Macro(MacroError),
}

impl Outcome {
    /// The text the REPL prints for this outcome, if any.
    pub fn render(&self) -> Option<String> {
        match self {
            Outcome::Empty => None,
            Outcome::Value(value) => Some(value.inspect()),
            Outcome::ParseErrors(messages) => Some(messages.join("\n")),
            Outcome::Macro(err) => Some(err.to_string()),
        }
    }

    /// Whether the input failed to parse, expand, or evaluate.
    pub fn is_failure(&self) -> bool {
        match self {
            Outcome::Empty => false,
            Outcome::Value(value) => value.is_error(),
            Outcome::ParseErrors(_) | Outcome::Macro(_) => true,
        }
    }
}

impl Session {
    /// A session whose `puts` writes to stdout.
    pub fn new() -> Self {
        Self::with_interpreter(Interpreter::new())
    }

    /// A session whose `puts` writes to `handler`.
    pub fn with_print_handler(handler: SharedPrintHandler) -> Self {
        Self::with_interpreter(Interpreter::builder().print_handler(handler).build())
    }

    pub fn with_interpreter(interpreter: Interpreter) -> Self {
        Session {
            interpreter,
            env: Environment::new_root(),
            macro_env: Environment::new_root(),
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// The runtime environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn macro_env(&self) -> &Environment {
        &self.macro_env
    }

    /// Lex, parse, define and expand macros, then evaluate.
    pub fn run(&mut self, source: &str) -> Outcome {
        let tokens = monkey_lexer::lex(source);
        let output = monkey_parse::parse(&tokens);
        if output.has_errors() {
            return Outcome::ParseErrors(output.error_messages());
        }

        let program = self
            .interpreter
            .define_macros(output.program, &self.macro_env);
        let program = match self.interpreter.expand_macros(program, &self.macro_env) {
            Ok(program) => program,
            Err(err) => {
                debug!(error = %err, "macro expansion failed");
                return Outcome::Macro(err);
            }
        };
        if program.statements.is_empty() {
            return Outcome::Empty;
        }

        Outcome::Value(self.interpreter.eval_program(&program, &self.env))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one input in `session`.
pub fn run_source(source: &str, session: &mut Session) -> Outcome {
    session.run(source)
}
