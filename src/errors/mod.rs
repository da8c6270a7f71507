//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Error structures with source position information
//! - Syntax errors raised by the lexer and parser
//! - Semantic errors attached to AST nodes by the type checker
//! - Structural errors signalling a broken pipeline invariant

pub mod errors;
