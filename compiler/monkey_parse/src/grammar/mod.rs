//! Grammar productions.
//!
//! - `stmt`: statements and blocks
//! - `expr`: the Pratt expression parser

mod expr;
mod stmt;

pub use expr::Precedence;
