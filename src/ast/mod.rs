/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node trait, the stylesheet root and all statement nodes
/// - expressions: Literals, variable references and arithmetic operations
/// - types: Expression type tags used by the type checker
pub mod ast;
pub mod expressions;
pub mod types;

#[cfg(test)]
mod tests;
