//! Constant folding and branch flattening.
//!
//! The evaluator rewrites a checked stylesheet into its final form: every
//! declaration holds a literal, variable assignments are consumed and if/else
//! clauses are replaced by the declarations of the branch that was taken.

pub mod evaluator;
