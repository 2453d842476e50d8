//! AST node definitions.
//!
//! The node set is closed: `Statement` and `Expression` are sum types and
//! every consumer (evaluator, rewrite, renderer) matches them exhaustively.
//!
//! Nodes are immutable once built. The only pass that changes a tree is
//! macro expansion, which consumes the program and returns a rewritten one
//! before evaluation starts.

mod display;
mod operators;


use std::rc::Rc;

pub use operators::{InfixOp, PrefixOp};

/// A whole program: an ordered statement sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }
}

/// A `{ ... }` statement sequence (function bodies, `if` branches).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Self {
        Block { statements }
    }
}

/// A name in binding or reference position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// `let NAME = VALUE;`
    Let { name: Identifier, value: Expression },
    /// `return VALUE;`
    Return(Expression),
    /// An expression in statement position (optional trailing `;`).
    Expression(Expression),
    /// A nested block.
    Block(Block),
}

/// Parameters and body shared by `fn` and `macro` literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: Block,
}

/// Expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(i64),
    Boolean(bool),
    String(String),
    Prefix {
        op: PrefixOp,
        operand: Box<Expression>,
    },
    Infix {
        op: InfixOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: Block,
        alternative: Option<Block>,
    },
    /// `fn(PARAMS) { BODY }`
    Function(Rc<FunctionLiteral>),
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Array(Vec<Expression>),
    /// Key/value pairs in source order.
    Hash(Vec<(Expression, Expression)>),
    /// `TARGET[INDEX]`
    Subscript {
        target: Box<Expression>,
        index: Box<Expression>,
    },
    /// `macro(PARAMS) { BODY }`
    Macro(Rc<FunctionLiteral>),
    /// Placeholder left by the parser where a production failed.
    Invalid,
}

impl Expression {
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn prefix(op: PrefixOp, operand: Expression) -> Self {
        Expression::Prefix {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn infix(op: InfixOp, left: Expression, right: Expression) -> Self {
        Expression::Infix {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// If this is a call to the identifier `name` with exactly one argument,
    /// return that argument.
    ///
    /// `quote(...)` and `unquote(...)` are recognised this way.
    pub fn as_unary_call_to(&self, name: &str) -> Option<&Expression> {
        match self {
            Expression::Call { callee, arguments } if arguments.len() == 1 => match &**callee {
                Expression::Identifier(ident) if ident.as_str() == name => arguments.first(),
                _ => None,
            },
            _ => None,
        }
    }
}

/// A borrowed reference to any node, for entry points that accept
/// programs, statements, and expressions alike.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Block(&'a Block),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        Node::Statement(stmt)
    }
}

impl<'a> From<&'a Block> for Node<'a> {
    fn from(block: &'a Block) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        Node::Expression(expr)
    }
}
