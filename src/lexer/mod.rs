//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts ICSS source
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of dimensioned literals (`10px`, `50%`), colors and selectors
//! - Reserved words (`if`, `else`, `TRUE`, `FALSE`)
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
