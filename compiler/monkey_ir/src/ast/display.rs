//! Canonical textual rendering of the AST.
//!
//! The rendering is what the REPL echoes and what tests compare against:
//! - infix: `(LEFT OP RIGHT)`, prefix: `(OPRIGHT)`
//! - blocks: `{ STMT STMT }`
//! - if/else: `if (COND) CONSEQ else ALT`
//! - calls: `NAME(ARG,ARG)`, arrays: `[A,B]`
//! - strings render as their raw content, without quotes

use std::fmt::{self, Display, Formatter};

use super::{Block, Expression, FunctionLiteral, Identifier, Node, Program, Statement};

/// Write `items` separated by `sep`.
fn write_separated<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_separated(f, &self.statements, " ")
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_separated(f, &self.statements, " ")?;
        f.write_str(" }")
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return(value) => write!(f, "return {value};"),
            Statement::Expression(expr) => write!(f, "{expr}"),
            Statement::Block(block) => write!(f, "{block}"),
        }
    }
}

impl FunctionLiteral {
    /// Render as `KEYWORD(PARAMS) BODY`.
    pub(crate) fn fmt_with_keyword(&self, keyword: &str, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{keyword}(")?;
        write_separated(f, &self.parameters, ", ")?;
        write!(f, ") {}", self.body)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::Integer(value) => write!(f, "{value}"),
            Expression::Boolean(value) => write!(f, "{value}"),
            Expression::String(value) => f.write_str(value),
            Expression::Prefix { op, operand } => write!(f, "({op}{operand})"),
            Expression::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Expression::Function(literal) => literal.fmt_with_keyword("fn", f),
            Expression::Macro(literal) => literal.fmt_with_keyword("macro", f),
            Expression::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_separated(f, arguments, ",")?;
                f.write_str(")")
            }
            Expression::Array(elements) => {
                f.write_str("[")?;
                write_separated(f, elements, ",")?;
                f.write_str("]")
            }
            Expression::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Expression::Subscript { target, index } => write!(f, "({target}[{index}])"),
            Expression::Invalid => f.write_str("<invalid>"),
        }
    }
}

impl Display for Node<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(program) => write!(f, "{program}"),
            Node::Statement(stmt) => write!(f, "{stmt}"),
            Node::Block(block) => write!(f, "{block}"),
            Node::Expression(expr) => write!(f, "{expr}"),
        }
    }
}
