//! CSS generator.
//!
//! This module contains the Generator structure that walks an evaluated
//! stylesheet and builds the output text.


use crate::{
    ast::ast::{BodyStmt, Stylerule, Stylesheet},
    errors::errors::{Error, ErrorImpl},
};

/// Accumulates the CSS output of one stylesheet.
pub struct Generator {
    /// The CSS emitted so far
    pub output: String,
}

impl Generator {
    pub fn new() -> Self {
        Generator {
            output: String::new(),
        }
    }

    /// Emits one stylerule block.
    ///
    /// # Errors
    ///
    /// Fails with `UnevaluatedExpression` when a declaration does not hold a
    /// literal, which means the evaluator has not run on this tree.
    pub fn generate_stylerule(&mut self, stylerule: &Stylerule) -> Result<(), Error> {
        self.output.push_str(&stylerule.selector.text);
        self.output.push_str(" {\n");

        for stmt in stylerule.body.iter() {
            // Assignments and if clauses never survive evaluation
            let BodyStmt::Declaration(declaration) = stmt else {
                continue;
            };

            let value = declaration.expression.as_literal().ok_or_else(|| {
                Error::new(
                    ErrorImpl::UnevaluatedExpression { property: declaration.property.clone() },
                    declaration.span.start.clone(),
                )
            })?;

            self.output.push_str(&format!("  {}: {};\n", declaration.property, value));
        }

        self.output.push_str("}\n\n");
        Ok(())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new()
    }
}

/// Generates the CSS text for an evaluated stylesheet.
///
/// Only stylerules are emitted. The tree is not modified, so calling this
/// repeatedly yields identical output.
#[tracing::instrument(skip_all)]
pub fn generate(stylesheet: &Stylesheet) -> Result<String, Error> {
    let mut generator = Generator::new();

    for stylerule in stylesheet.stylerules() {
        generator.generate_stylerule(stylerule)?;
    }

    tracing::debug!(bytes = generator.output.len(), "generated css");
    Ok(generator.output)
}
