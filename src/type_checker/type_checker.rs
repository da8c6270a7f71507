use crate::{
    ast::{
        ast::{BodyStmt, Declaration, IfClause, Node, RootStmt, Stylerule, Stylesheet},
        expressions::{Expr, ExprKind, Operator},
        types::ExpressionType,
    },
    config::config::{CompilerConfig, PropertyRules},
    errors::errors::{Error, ErrorImpl},
    scope::scope_stack::ScopeStack,
};

/// State of a single checking pass.
#[derive(Debug)]
pub struct TypeChecker<'a> {
    pub scopes: ScopeStack<ExpressionType>,
    pub property_rules: &'a PropertyRules,
    pub max_depth: usize,
    pub max_expression_depth: usize,
    depth: usize,
}

impl<'a> TypeChecker<'a> {
    pub fn new(config: &'a CompilerConfig) -> Self {
        TypeChecker {
            scopes: ScopeStack::new(),
            property_rules: &config.property_rules,
            max_depth: config.max_nesting_depth,
            max_expression_depth: config.max_expression_depth,
            depth: 0,
        }
    }

    /// Opens a block scope, failing once the configured depth is exceeded.
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

/// Checks the whole stylesheet, attaching semantic errors to the nodes that cause them.
///
/// Every violation is recorded, traversal never stops at the first one. The
/// returned error is reserved for structural failures (scope underflow,
/// blocks or expressions deeper than the configured limits).
#[tracing::instrument(skip_all)]
pub fn type_check(stylesheet: &mut Stylesheet, config: &CompilerConfig) -> Result<(), Error> {
    let mut type_checker = TypeChecker::new(config);
    type_checker.scopes.enter_scope();

    for stmt in stylesheet.body.iter_mut() {
        match stmt {
            RootStmt::VariableAssignment(assignment) => {
                let ty = type_check_expr(&mut type_checker, &mut assignment.expression)?;
                type_checker.scopes.define(&assignment.name, ty)?;
            }
            RootStmt::Stylerule(stylerule) => type_check_stylerule(&mut type_checker, stylerule)?,
        }
    }

    type_checker.scopes.exit_scope()?;

    let errors = stylesheet.errors().len();
    tracing::debug!(errors, "type check finished");
    Ok(())
}

pub fn type_check_stylerule(type_checker: &mut TypeChecker, stylerule: &mut Stylerule) -> Result<(), Error> {
    type_checker.enter_block(&*stylerule)?;
    type_check_block(type_checker, &mut stylerule.body)?;
    type_checker.exit_block()
}

pub fn type_check_block(type_checker: &mut TypeChecker, body: &mut [BodyStmt]) -> Result<(), Error> {
    for stmt in body.iter_mut() {
        type_check_stmt(type_checker, stmt)?;
    }
    Ok(())
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, stmt: &mut BodyStmt) -> Result<(), Error> {
    match stmt {
        BodyStmt::Declaration(declaration) => type_check_declaration(type_checker, declaration),
        BodyStmt::VariableAssignment(assignment) => {
            let ty = type_check_expr(type_checker, &mut assignment.expression)?;
            type_checker.scopes.define(&assignment.name, ty)
        }
        BodyStmt::IfClause(if_clause) => type_check_if(type_checker, if_clause),
    }
}

fn type_check_declaration(type_checker: &mut TypeChecker, declaration: &mut Declaration) -> Result<(), Error> {
    let ty = type_check_expr(type_checker, &mut declaration.expression)?;

    if let Some(allowed) = type_checker.property_rules.get(&declaration.property) {
        if !allowed.contains(&ty) {
            let error = Error::new(
                ErrorImpl::PropertyTypeMismatch {
                    property: declaration.property.clone(),
                    expected: ExpressionType::describe(allowed),
                },
                declaration.span.start.clone(),
            );
            declaration.add_error(error);
        }
    }

    Ok(())
}

/// The if and else bodies each get their own scope.
fn type_check_if(type_checker: &mut TypeChecker, if_clause: &mut IfClause) -> Result<(), Error> {
    let ty = type_check_expr(type_checker, &mut if_clause.condition)?;
    if ty != ExpressionType::Bool {
        let error = Error::new(
            ErrorImpl::NonBooleanCondition { received: ty.to_string() },
            if_clause.span.start.clone(),
        );
        if_clause.add_error(error);
    }

    type_checker.enter_block(&*if_clause)?;
    type_check_block(type_checker, &mut if_clause.body)?;
    type_checker.exit_block()?;

    if let Some(else_clause) = if_clause.else_clause.as_mut() {
        type_checker.enter_block(&*else_clause)?;
        type_check_block(type_checker, &mut else_clause.body)?;
        type_checker.exit_block()?;
    }

    Ok(())
}

/// Infers the type of `expr`. Unresolved variables and operator violations
/// are recorded on the offending node and typed `Undefined`.
pub fn type_check_expr(type_checker: &mut TypeChecker, expr: &mut Expr) -> Result<ExpressionType, Error> {
    if expr.depth() > type_checker.max_expression_depth {
        return Err(Error::new(
            ErrorImpl::ExpressionTooDeep { limit: type_checker.max_expression_depth },
            expr.span.start.clone(),
        ));
    }

    let mut error = None;
    let ty = match &mut expr.kind {
        ExprKind::Literal(literal) => literal.get_type(),
        ExprKind::VariableReference(name) => match type_checker.scopes.resolve(name) {
            Some(ty) => *ty,
            None => {
                error = Some(ErrorImpl::VariableNotDeclared { variable: name.clone() });
                ExpressionType::Undefined
            }
        },
        ExprKind::Operation(operation) => {
            // Both sides are always checked so their own errors are reported too
            let left = type_check_expr(type_checker, &mut operation.lhs)?;
            let right = type_check_expr(type_checker, &mut operation.rhs)?;

            match operation_type(operation.operator, left, right) {
                Ok(ty) => ty,
                Err(violation) => {
                    error = Some(violation);
                    ExpressionType::Undefined
                }
            }
        }
    };

    if let Some(error) = error {
        let position = expr.span.start.clone();
        expr.add_error(Error::new(error, position));
    }

    tracing::trace!(%ty, offset = expr.span.start.0, "inferred expression type");
    Ok(ty)
}

/// Result type of `left <operator> right`.
pub fn operation_type(operator: Operator, left: ExpressionType, right: ExpressionType) -> Result<ExpressionType, ErrorImpl> {
    if left == ExpressionType::Color || right == ExpressionType::Color {
        return Err(ErrorImpl::ColorInOperation);
    }

    match operator {
        Operator::Add | Operator::Subtract => {
            if left == right {
                Ok(left)
            } else {
                Err(ErrorImpl::OperandTypeMismatch { left: left.to_string(), right: right.to_string() })
            }
        }
        Operator::Multiply | Operator::Divide => {
            if left == ExpressionType::Scalar {
                Ok(right)
            } else if right == ExpressionType::Scalar {
                Ok(left)
            } else {
                Err(ErrorImpl::MissingScalarOperand { operation: String::from(operator.name()) })
            }
        }
    }
}
