use std::fmt::Display;

use crate::{errors::errors::Error, Span};

use super::types::ExpressionType;

/// A literal value. After evaluation every declaration holds one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Pixel(i64),
    Percentage(i64),
    /// Stored verbatim, including the leading `#`.
    Color(String),
    Scalar(i64),
    Bool(bool),
}

impl Literal {
    pub fn get_type(&self) -> ExpressionType {
        match self {
            Literal::Pixel(_) => ExpressionType::Pixel,
            Literal::Percentage(_) => ExpressionType::Percentage,
            Literal::Color(_) => ExpressionType::Color,
            Literal::Scalar(_) => ExpressionType::Scalar,
            Literal::Bool(_) => ExpressionType::Bool,
        }
    }
}

/// CSS text of the value. Booleans keep the ICSS spelling.
impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Pixel(value) => write!(f, "{}px", value),
            Literal::Percentage(value) => write!(f, "{}%", value),
            Literal::Color(value) => write!(f, "{}", value),
            Literal::Scalar(value) => write!(f, "{}", value),
            Literal::Bool(true) => write!(f, "TRUE"),
            Literal::Bool(false) => write!(f, "FALSE"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Noun used in diagnostics ("addition", "division", ...).
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "addition",
            Operator::Subtract => "subtraction",
            Operator::Multiply => "multiplication",
            Operator::Divide => "division",
        }
    }
}

/// Binary arithmetic operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub operator: Operator,
    pub lhs: Expr,
    pub rhs: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    VariableReference(String),
    Operation(Box<Operation>),
}

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub errors: Vec<Error>,
    /// Number of nested operations below and including this node.
    depth: usize,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        let depth = match &kind {
            ExprKind::Operation(operation) => 1 + operation.lhs.depth.max(operation.rhs.depth),
            _ => 0,
        };

        Expr {
            kind,
            span,
            errors: vec![],
            depth,
        }
    }

    pub fn literal(literal: Literal, span: Span) -> Self {
        Expr::new(ExprKind::Literal(literal), span)
    }

    pub fn variable(name: &str, span: Span) -> Self {
        Expr::new(ExprKind::VariableReference(String::from(name)), span)
    }

    pub fn operation(operator: Operator, lhs: Expr, rhs: Expr, span: Span) -> Self {
        Expr::new(
            ExprKind::Operation(Box::new(Operation { operator, lhs, rhs })),
            span,
        )
    }

    /// `0` for literals and variables, `1 + max(lhs, rhs)` for operations.
    /// A flat chain `a + b + c` is as deep as it has operators.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match &self.kind {
            ExprKind::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub(crate) fn collect_errors<'a>(&'a self, out: &mut Vec<&'a Error>) {
        out.extend(self.errors.iter());
        if let ExprKind::Operation(operation) = &self.kind {
            operation.lhs.collect_errors(out);
            operation.rhs.collect_errors(out);
        }
    }
}
