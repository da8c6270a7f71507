use std::mem;

use crate::{
    ast::{
        ast::{BodyStmt, IfClause, Node, RootStmt, Stylerule, Stylesheet},
        expressions::{Expr, ExprKind, Literal, Operator},
    },
    config::config::CompilerConfig,
    errors::errors::{Error, ErrorImpl},
    scope::scope_stack::ScopeStack,
};

/// State of a single evaluation pass.
#[derive(Debug)]
pub struct Evaluator {
    pub scopes: ScopeStack<Literal>,
    pub max_depth: usize,
    pub max_expression_depth: usize,
    depth: usize,
}

impl Evaluator {
    pub fn new(config: &CompilerConfig) -> Self {
        Evaluator {
            scopes: ScopeStack::new(),
            max_depth: config.max_nesting_depth,
            max_expression_depth: config.max_expression_depth,
            depth: 0,
        }
    }

    fn enter_block(&mut self, node: &dyn Node) -> Result<(), Error> {
        if self.depth >= self.max_depth {
            return Err(Error::new(ErrorImpl::NestingTooDeep { limit: self.max_depth }, node.get_span().start.clone()));
        }
        self.depth += 1;
        self.scopes.enter_scope();
        Ok(())
    }

    fn exit_block(&mut self) -> Result<(), Error> {
        self.depth = self.depth.saturating_sub(1);
        self.scopes.exit_scope()
    }
}

/// Rewrites `stylesheet` in place so that only stylerules holding literal
/// declarations remain.
///
/// Expects a stylesheet without semantic errors, but never panics on one:
/// undefined variables evaluate to `0`, non-boolean conditions count as false
/// and mismatched or zero-divisor operations yield their left operand.
#[tracing::instrument(skip_all)]
pub fn evaluate(stylesheet: &mut Stylesheet, config: &CompilerConfig) -> Result<(), Error> {
    let mut evaluator = Evaluator::new(config);
    evaluator.scopes.enter_scope();

    let mut body = vec![];
    for stmt in mem::take(&mut stylesheet.body) {
        match stmt {
            RootStmt::VariableAssignment(assignment) => {
                let value = evaluate_expr(&mut evaluator, &assignment.expression)?;
                evaluator.scopes.define(&assignment.name, value)?;
            }
            RootStmt::Stylerule(mut stylerule) => {
                evaluate_stylerule(&mut evaluator, &mut stylerule)?;
                body.push(RootStmt::Stylerule(stylerule));
            }
        }
    }
    stylesheet.body = body;

    evaluator.scopes.exit_scope()
}

pub fn evaluate_stylerule(evaluator: &mut Evaluator, stylerule: &mut Stylerule) -> Result<(), Error> {
    evaluator.enter_block(&*stylerule)?;
    stylerule.body = evaluate_block(evaluator, mem::take(&mut stylerule.body))?;
    evaluator.exit_block()
}

/// Evaluates a body in order and returns what is left of it.
pub fn evaluate_block(evaluator: &mut Evaluator, body: Vec<BodyStmt>) -> Result<Vec<BodyStmt>, Error> {
    let mut output = vec![];

    for stmt in body {
        match stmt {
            BodyStmt::Declaration(mut declaration) => {
                let value = evaluate_expr(evaluator, &declaration.expression)?;
                let span = declaration.expression.span.clone();
                declaration.expression = Expr::literal(value, span);
                output.push(BodyStmt::Declaration(declaration));
            }
            BodyStmt::VariableAssignment(assignment) => {
                let value = evaluate_expr(evaluator, &assignment.expression)?;
                evaluator.scopes.define(&assignment.name, value)?;
            }
            BodyStmt::IfClause(if_clause) => {
                output.extend(evaluate_if(evaluator, if_clause)?);
            }
        }
    }

    Ok(output)
}

/// Returns the evaluated body of the branch that is taken.
fn evaluate_if(evaluator: &mut Evaluator, if_clause: IfClause) -> Result<Vec<BodyStmt>, Error> {
    let condition = match evaluate_expr(evaluator, &if_clause.condition)? {
        Literal::Bool(value) => value,
        _ => false,
    };
    tracing::debug!(condition, offset = if_clause.span.start.0, "selected branch");

    evaluator.enter_block(&if_clause)?;
    let output = if condition {
        evaluate_block(evaluator, if_clause.body)?
    } else if let Some(else_clause) = if_clause.else_clause {
        evaluate_block(evaluator, else_clause.body)?
    } else {
        vec![]
    };
    evaluator.exit_block()?;

    Ok(output)
}

pub fn evaluate_expr(evaluator: &mut Evaluator, expr: &Expr) -> Result<Literal, Error> {
    if expr.depth() > evaluator.max_expression_depth {
        return Err(Error::new(
            ErrorImpl::ExpressionTooDeep { limit: evaluator.max_expression_depth },
            expr.span.start.clone(),
        ));
    }

    match &expr.kind {
        ExprKind::Literal(literal) => Ok(literal.clone()),
        ExprKind::VariableReference(name) => match evaluator.scopes.resolve(name) {
            Some(value) => Ok(value.clone()),
            None => {
                tracing::warn!(variable = %name, "undefined variable evaluated as 0");
                Ok(Literal::Scalar(0))
            }
        },
        ExprKind::Operation(operation) => {
            let lhs = evaluate_expr(evaluator, &operation.lhs)?;
            let rhs = evaluate_expr(evaluator, &operation.rhs)?;
            Ok(evaluate_operation(operation.operator, lhs, rhs))
        }
    }
}

/// Combines two literals. Integer arithmetic wraps on overflow.
///
/// Pairings the type rules reject, and division by zero, return `lhs` unchanged.
pub fn evaluate_operation(operator: Operator, lhs: Literal, rhs: Literal) -> Literal {
    use Literal::*;

    let result = match (operator, &lhs, &rhs) {
        (Operator::Add, Pixel(a), Pixel(b)) => Some(Pixel(a.wrapping_add(*b))),
        (Operator::Add, Percentage(a), Percentage(b)) => Some(Percentage(a.wrapping_add(*b))),
        (Operator::Add, Scalar(a), Scalar(b)) => Some(Scalar(a.wrapping_add(*b))),

        (Operator::Subtract, Pixel(a), Pixel(b)) => Some(Pixel(a.wrapping_sub(*b))),
        (Operator::Subtract, Percentage(a), Percentage(b)) => Some(Percentage(a.wrapping_sub(*b))),
        (Operator::Subtract, Scalar(a), Scalar(b)) => Some(Scalar(a.wrapping_sub(*b))),

        (Operator::Multiply, Scalar(a), Pixel(b)) | (Operator::Multiply, Pixel(a), Scalar(b)) => {
            Some(Pixel(a.wrapping_mul(*b)))
        }
        (Operator::Multiply, Scalar(a), Percentage(b)) | (Operator::Multiply, Percentage(a), Scalar(b)) => {
            Some(Percentage(a.wrapping_mul(*b)))
        }
        (Operator::Multiply, Scalar(a), Scalar(b)) => Some(Scalar(a.wrapping_mul(*b))),

        (Operator::Divide, _, Pixel(0) | Percentage(0) | Scalar(0)) => None,
        (Operator::Divide, Scalar(a), Pixel(b)) | (Operator::Divide, Pixel(a), Scalar(b)) => {
            Some(Pixel(a.wrapping_div(*b)))
        }
        (Operator::Divide, Scalar(a), Percentage(b)) | (Operator::Divide, Percentage(a), Scalar(b)) => {
            Some(Percentage(a.wrapping_div(*b)))
        }
        (Operator::Divide, Scalar(a), Scalar(b)) => Some(Scalar(a.wrapping_div(*b))),

        _ => None,
    };

    result.unwrap_or(lhs)
}
