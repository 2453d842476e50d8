//! Runtime values.
//!
//! `Object` is a closed sum type. Scalars (`Integer`, `Boolean`, `Null`)
//! are stored inline; everything else shares its payload through `Rc`, so
//! cloning an `Object` never copies an array, hash, or function body.
//!
//! # Equality
//!
//! `true`, `false` and `null` are enum discriminants, and two values with
//! the same discriminant are the same value. The language-level `==` falls
//! back to this for booleans and null, and to pointer identity for the
//! `Rc`-backed variants (see [`crate::operators`]). The `PartialEq` impl on
//! `Object` is structural and exists for tests and assertions only.

mod hash;

#[cfg(test)]
mod tests;

use std::fmt;
use std::rc::Rc;

use monkey_ir::{Expression, FunctionLiteral};

use crate::builtins::Builtin;
use crate::environment::Environment;

pub use hash::{HashKey, HashObject, HashPair};

/// A runtime value.
#[derive(Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Array(Rc<Vec<Object>>),
    Hash(Rc<HashObject>),
    Function(Rc<Closure>),
    Builtin(Builtin),
    Null,
    /// A first-class evaluation error (message only).
    Error(Rc<str>),
    /// Wrapper carrying a `return` value up to the nearest call or program
    /// boundary.
    Return(Box<Object>),
    /// An unevaluated AST fragment produced by `quote`.
    Quote(Rc<Expression>),
    Macro(Rc<Closure>),
}

/// Type tag of an [`Object`], as it appears in error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Integer,
    Boolean,
    String,
    Array,
    Hash,
    Function,
    Builtin,
    Null,
    Error,
    Return,
    Quote,
    Macro,
}

impl ObjectType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::Array => "Array",
            Self::Hash => "Hash",
            Self::Function => "Function",
            Self::Builtin => "Builtin",
            Self::Null => "Null",
            Self::Error => "Error",
            Self::Return => "Return",
            Self::Quote => "Quote",
            Self::Macro => "Macro",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A function or macro literal paired with the environment it was
/// evaluated in.
pub struct Closure {
    pub literal: Rc<FunctionLiteral>,
    pub env: Environment,
}

impl Closure {
    pub fn new(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        Closure { literal, env }
    }

    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.literal.parameters.len()
    }

    fn fmt_with_keyword(&self, keyword: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{keyword}(")?;
        for (i, param) in self.literal.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {}", self.literal.body)
    }
}

// The captured environment may hold this closure again, so Debug stops at
// the literal.
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("literal", &self.literal)
            .finish_non_exhaustive()
    }
}

impl Object {
    #[inline]
    pub fn string(value: impl Into<Rc<str>>) -> Self {
        Object::String(value.into())
    }

    pub fn array(elements: Vec<Object>) -> Self {
        Object::Array(Rc::new(elements))
    }

    pub fn error(message: impl Into<Rc<str>>) -> Self {
        Object::Error(message.into())
    }

    pub fn type_of(&self) -> ObjectType {
        match self {
            Object::Integer(_) => ObjectType::Integer,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::String(_) => ObjectType::String,
            Object::Array(_) => ObjectType::Array,
            Object::Hash(_) => ObjectType::Hash,
            Object::Function(_) => ObjectType::Function,
            Object::Builtin(_) => ObjectType::Builtin,
            Object::Null => ObjectType::Null,
            Object::Error(_) => ObjectType::Error,
            Object::Return(_) => ObjectType::Return,
            Object::Quote(_) => ObjectType::Quote,
            Object::Macro(_) => ObjectType::Macro,
        }
    }

    /// Everything except `false` and `null` is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Hash key for `Integer`, `Boolean` and `String`; `None` otherwise.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(value) => Some(HashKey::Integer(*value)),
            Object::Boolean(value) => Some(HashKey::Boolean(*value)),
            Object::String(value) => Some(HashKey::String(Rc::clone(value))),
            _ => None,
        }
    }

    /// The inspect form, as the REPL prints it.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::String(Rc::from(value))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::String(value) => f.write_str(value),
            Object::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Object::Hash(hash) => write!(f, "{hash}"),
            Object::Function(closure) => closure.fmt_with_keyword("fn", f),
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::Null => f.write_str("null"),
            Object::Error(message) => write!(f, "Error: {message}"),
            Object::Return(value) => write!(f, "{value}"),
            Object::Quote(node) => write!(f, "QUOTE({node})"),
            Object::Macro(closure) => closure.fmt_with_keyword("macro", f),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "Integer({value})"),
            Object::Boolean(value) => write!(f, "Boolean({value})"),
            Object::String(value) => write!(f, "String({value:?})"),
            Object::Array(elements) => f.debug_tuple("Array").field(elements).finish(),
            Object::Hash(hash) => f.debug_tuple("Hash").field(hash).finish(),
            Object::Function(closure) => f.debug_tuple("Function").field(closure).finish(),
            Object::Builtin(builtin) => write!(f, "Builtin({})", builtin.name),
            Object::Null => f.write_str("Null"),
            Object::Error(message) => write!(f, "Error({message:?})"),
            Object::Return(value) => f.debug_tuple("Return").field(value).finish(),
            Object::Quote(node) => write!(f, "Quote({node})"),
            Object::Macro(closure) => f.debug_tuple("Macro").field(closure).finish(),
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::String(a), Object::String(b)) | (Object::Error(a), Object::Error(b)) => {
                a == b
            }
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Hash(a), Object::Hash(b)) => a == b,
            (Object::Function(a), Object::Function(b)) | (Object::Macro(a), Object::Macro(b)) => {
                Rc::ptr_eq(a, b)
            }
            (Object::Builtin(a), Object::Builtin(b)) => a.name == b.name,
            (Object::Null, Object::Null) => true,
            (Object::Return(a), Object::Return(b)) => a == b,
            (Object::Quote(a), Object::Quote(b)) => a == b,
            _ => false,
        }
    }
}
