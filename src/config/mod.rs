//! Compiler configuration.
//!
//! Holds the property type rules used by the type checker and the structural
//! limits of the pipeline. Configuration is read from a JSON file; missing
//! fields fall back to the built-in defaults.

pub mod config;
