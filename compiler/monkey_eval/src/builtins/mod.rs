//! Built-in functions.
//!
//! Built-ins are resolved only after the environment chain misses, so a
//! user binding named `len` shadows the built-in. Each function checks its
//! own arity and operand types and reports violations as `EvalError`s.
//!
//! Arrays are persistent: `rest` and `push` build new arrays and never
//! touch their argument.


use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::{builtin_arity_mismatch, builtin_type_mismatch, EvalError, EvalResult};
use crate::interpreter::Interpreter;
use crate::object::Object;

/// Native callback signature.
pub type BuiltinFn = fn(&Interpreter, &[Object]) -> EvalResult;

/// A named native function.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    #[inline]
    pub fn call(&self, interpreter: &Interpreter, args: &[Object]) -> EvalResult {
        (self.func)(interpreter, args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Builtin").field(&self.name).finish()
    }
}

const STANDARD: [Builtin; 6] = [
    Builtin::new("len", len),
    Builtin::new("first", first),
    Builtin::new("last", last),
    Builtin::new("rest", rest),
    Builtin::new("push", push),
    Builtin::new("puts", puts),
];

/// Name-to-function table consulted after environment lookup.
#[derive(Clone, Debug, Default)]
pub struct BuiltinRegistry {
    table: FxHashMap<&'static str, Builtin>,
}

impl BuiltinRegistry {
    /// `len`, `first`, `last`, `rest`, `push` and `puts`.
    pub fn standard() -> Self {
        let mut registry = Self::default();
        for builtin in STANDARD {
            registry.register(builtin);
        }
        registry
    }

    /// Add or replace a built-in.
    pub fn register(&mut self, builtin: Builtin) {
        self.table.insert(builtin.name, builtin);
    }

    pub fn get(&self, name: &str) -> Option<Builtin> {
        self.table.get(name).copied()
    }
}

#[inline]
fn check_arity(name: &'static str, args: &[Object], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(builtin_arity_mismatch(name, expected, args.len()))
    }
}

/// `len(s)` is the byte length of a string; `len(a)` the element count.
fn len(_: &Interpreter, args: &[Object]) -> EvalResult {
    check_arity("len", args, 1)?;
    match &args[0] {
        Object::String(value) => Ok(Object::Integer(count(value.len()))),
        Object::Array(elements) => Ok(Object::Integer(count(elements.len()))),
        _ => Err(builtin_type_mismatch("len", args)),
    }
}

fn first(_: &Interpreter, args: &[Object]) -> EvalResult {
    check_arity("first", args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(elements.first().cloned().unwrap_or(Object::Null)),
        _ => Err(builtin_type_mismatch("first", args)),
    }
}

fn last(_: &Interpreter, args: &[Object]) -> EvalResult {
    check_arity("last", args, 1)?;
    match &args[0] {
        Object::Array(elements) => Ok(elements.last().cloned().unwrap_or(Object::Null)),
        _ => Err(builtin_type_mismatch("last", args)),
    }
}

/// Everything after the first element; `null` for an empty array.
fn rest(_: &Interpreter, args: &[Object]) -> EvalResult {
    check_arity("rest", args, 1)?;
    match &args[0] {
        Object::Array(elements) => match elements.split_first() {
            Some((_, tail)) => Ok(Object::Array(Rc::new(tail.to_vec()))),
            None => Ok(Object::Null),
        },
        _ => Err(builtin_type_mismatch("rest", args)),
    }
}

/// `push(array, value)` returns a copy of `array` with `value` appended.
fn push(_: &Interpreter, args: &[Object]) -> EvalResult {
    check_arity("push", args, 2)?;
    match &args[0] {
        Object::Array(elements) => {
            let mut extended = Vec::with_capacity(elements.len() + 1);
            extended.extend(elements.iter().cloned());
            extended.push(args[1].clone());
            Ok(Object::Array(Rc::new(extended)))
        }
        _ => Err(builtin_type_mismatch("push", args)),
    }
}

/// Print each argument's inspect form on its own line.
fn puts(interpreter: &Interpreter, args: &[Object]) -> EvalResult {
    let handler = interpreter.print_handler();
    for arg in args {
        handler.println(&arg.inspect());
    }
    Ok(Object::Null)
}

#[inline]
fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
