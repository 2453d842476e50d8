//! Stack growth for the recursive parser and evaluator.
//!
//! Both the Pratt parser and the tree-walking evaluator recurse once per
//! nesting level of the source program (and the evaluator once more per
//! Monkey function call). Wrapping those entry points in
//! [`ensure_sufficient_stack`] lets deeply nested input grow the stack
//! on demand instead of aborting the process.
//!
//! On `wasm32` the wrapper is a plain call.

#[cfg(test)]
mod tests;

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
///
/// A single Monkey call frame goes through several Rust frames
/// (call, body block, statement, expression), so segments are sized larger
/// than a pure parser would need.
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval_expression(&self, expr: &Expression, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining stack in bytes, when the platform can tell.
///
/// Used by the interpreter's call tracing.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
