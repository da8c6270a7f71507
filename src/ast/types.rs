//! Type tags inferred for expressions by the type checker.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The type of an ICSS expression.
///
/// `Undefined` is produced for unresolved variables and for operations whose
/// operands violate the operator rules. Operator rules treat it like any other
/// type, so `Undefined + Undefined` is `Undefined` and so is `Undefined * 2`.
/// No default property rule accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionType {
    Pixel,
    Percentage,
    Color,
    Scalar,
    Bool,
    Undefined,
}

impl ExpressionType {
    /// Lowercase name used in diagnostics and configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            ExpressionType::Pixel => "pixel",
            ExpressionType::Percentage => "percentage",
            ExpressionType::Color => "color",
            ExpressionType::Scalar => "scalar",
            ExpressionType::Bool => "bool",
            ExpressionType::Undefined => "undefined",
        }
    }

    /// Joins the names of `types` with "or", e.g. `pixel or percentage`.
    pub fn describe(types: &[ExpressionType]) -> String {
        types
            .iter()
            .map(|ty| ty.name())
            .collect::<Vec<&str>>()
            .join(" or ")
    }
}

impl Display for ExpressionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
