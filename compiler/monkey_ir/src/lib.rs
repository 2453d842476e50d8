//! Monkey IR - shared data types for the Monkey interpreter.
//!
//! This crate contains the data structures every phase agrees on:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Program`, `Statement`, `Expression`, ...)
//! - Canonical rendering of the AST (`Display`)
//! - The generic AST rewrite shared by `quote`/`unquote` and macro expansion
//!
//! # Design Philosophy
//!
//! - **Closed sum types**: every dispatch over tokens or nodes is an exhaustive
//!   `match`, so adding a variant is a compile error at every site that must
//!   handle it.
//! - **Plain data**: AST nodes own their children (`Box`/`Vec`) and carry no
//!   spans. Function and macro literals sit behind `Rc` so runtime closures can
//!   share them without cloning the body.

pub mod ast;
pub mod rewrite;
mod span;
mod token;

pub use ast::{
    Block, Expression, FunctionLiteral, Identifier, InfixOp, Node, PrefixOp, Program, Statement,
};
pub use rewrite::{modify_expression, modify_program, Rewriter};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
