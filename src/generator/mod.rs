//! CSS generation.
//!
//! Serialises an evaluated stylesheet to CSS text: one block per stylerule,
//! declarations indented by two spaces and a blank line after every block.

pub mod generator;

#[cfg(test)]
mod tests;
