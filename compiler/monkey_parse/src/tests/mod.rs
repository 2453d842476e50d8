//! Parser tests.
//!
//! - `parser`: statements, literals, operators and precedence
//! - `recovery`: diagnostics and recovery from malformed input
