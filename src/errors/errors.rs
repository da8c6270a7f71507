use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Whether this error is a semantic annotation rather than a fatal pipeline failure.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::PropertyTypeMismatch { .. }
                | ErrorImpl::VariableNotDeclared { .. }
                | ErrorImpl::NonBooleanCondition { .. }
                | ErrorImpl::OperandTypeMismatch { .. }
                | ErrorImpl::ColorInOperation
                | ErrorImpl::MissingScalarOperand { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::PropertyTypeMismatch { .. } => "PropertyTypeMismatch",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::NonBooleanCondition { .. } => "NonBooleanCondition",
            ErrorImpl::OperandTypeMismatch { .. } => "OperandTypeMismatch",
            ErrorImpl::ColorInOperation => "ColorInOperation",
            ErrorImpl::MissingScalarOperand { .. } => "MissingScalarOperand",
            ErrorImpl::ScopeUnderflow => "ScopeUnderflow",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::ExpressionTooDeep { .. } => "ExpressionTooDeep",
            ErrorImpl::UnevaluatedExpression { .. } => "UnevaluatedExpression",
            ErrorImpl::ConfigError { .. } => "ConfigError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::PropertyTypeMismatch { property, expected } => ErrorTip::Suggestion(
                format!("Property {} requires a {} value", property, expected),
            ),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable {} is not defined", variable))
            }
            ErrorImpl::NonBooleanCondition { received } => ErrorTip::Suggestion(format!(
                "If condition must be a boolean value, received `{}`",
                received
            )),
            ErrorImpl::OperandTypeMismatch { left, right } => ErrorTip::Suggestion(format!(
                "Operands of addition/subtraction must be of the same type, received `{}` and `{}`",
                left, right
            )),
            ErrorImpl::ColorInOperation => {
                ErrorTip::Suggestion(String::from("Colors cannot be used in operations"))
            }
            ErrorImpl::MissingScalarOperand { operation } => ErrorTip::Suggestion(format!(
                "At least one operand of {} must be a scalar",
                operation
            )),
            ErrorImpl::ScopeUnderflow => ErrorTip::Suggestion(String::from(
                "A scope was closed that was never opened, this is a compiler bug",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Blocks and groups may be nested at most {} levels deep",
                limit
            )),
            ErrorImpl::ExpressionTooDeep { limit } => ErrorTip::Suggestion(format!(
                "An expression may contain at most {} operations in a chain, split it using variables",
                limit
            )),
            ErrorImpl::UnevaluatedExpression { property } => ErrorTip::Suggestion(format!(
                "Declaration `{}` still holds an expression, run the evaluator before generating",
                property
            )),
            ErrorImpl::ConfigError { message } => ErrorTip::Suggestion(message.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Syntax
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    // Semantic
    #[error("property {property:?} requires a {expected} value")]
    PropertyTypeMismatch { property: String, expected: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("if condition must be a boolean, received {received}")]
    NonBooleanCondition { received: String },
    #[error("operand types do not match: {left} and {right}")]
    OperandTypeMismatch { left: String, right: String },
    #[error("colors cannot be used in operations")]
    ColorInOperation,
    #[error("at least one operand of {operation} must be a scalar")]
    MissingScalarOperand { operation: String },

    // Structural
    #[error("scope stack underflow")]
    ScopeUnderflow,
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("expression deeper than {limit} operations")]
    ExpressionTooDeep { limit: usize },
    #[error("declaration {property:?} holds an unevaluated expression")]
    UnevaluatedExpression { property: String },

    #[error("invalid configuration: {message}")]
    ConfigError { message: String },
}
