//! Lexical scoping shared by the type checker and the evaluator.
//!
//! A scope stack holds one frame per open block (the global frame, then one
//! per stylerule, if body and else body). The checker stores expression types
//! in it, the evaluator stores literal values.

pub mod scope_stack;

#[cfg(test)]
mod tests;
