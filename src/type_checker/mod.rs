//! Type checking and semantic analysis module.
//!
//! This module infers the type of every expression and records semantic
//! errors directly on the AST nodes that cause them:
//!
//! - Property values that do not match the configured property rules
//! - References to variables that are not in scope
//! - Non-boolean if conditions
//! - Operands that violate the arithmetic rules
//!
//! The checker keeps a scope stack of variable types that mirrors the block
//! structure of the stylesheet. It never rewrites the tree.

pub mod type_checker;

#[cfg(test)]
mod tests;
