//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a stylesheet. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Top-level statements (stylerules, variable assignments)
//! - Body statements (declarations, assignments, if/else clauses)
//! - Expressions (arithmetic, unary minus, grouping, literals, variables)
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.
//! The first syntax error aborts parsing.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
