use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span,
};

use super::{
    ast::{BodyStmt, Declaration, ElseClause, IfClause, Node, RootStmt, Selector, SelectorKind, Stylerule, Stylesheet, VariableAssignment},
    expressions::{Expr, Literal, Operator},
    types::ExpressionType,
};

fn error(variable: &str, offset: u32) -> Error {
    Error::new(
        ErrorImpl::VariableNotDeclared { variable: variable.to_string() },
        Position(offset, Rc::new("test.icss".to_string())),
    )
}

fn variable(name: &str) -> Expr {
    Expr::variable(name, Span::null())
}

#[test]
fn test_errors_in_pre_order() {
    let mut lhs = variable("Lhs");
    lhs.add_error(error("Lhs", 3));
    let mut operation = Expr::operation(Operator::Add, lhs, variable("Rhs"), Span::null());
    operation.add_error(error("Operation", 2));

    let mut declaration = Declaration::new("width", operation, Span::null());
    declaration.add_error(error("Declaration", 1));

    let mut condition = variable("Cond");
    condition.add_error(error("Cond", 5));
    let mut else_clause = ElseClause::new(vec![], Span::null());
    else_clause.add_error(error("Else", 6));
    let mut if_clause = IfClause::new(condition, vec![], Some(else_clause), Span::null());
    if_clause.add_error(error("If", 4));

    let mut assignment_expr = variable("Global");
    assignment_expr.add_error(error("Global", 0));

    let stylesheet = Stylesheet::new(
        vec![
            RootStmt::VariableAssignment(VariableAssignment::new("A", assignment_expr, Span::null())),
            RootStmt::Stylerule(Stylerule::new(
                Selector::new(SelectorKind::Tag, "p", Span::null()),
                vec![BodyStmt::Declaration(declaration), BodyStmt::IfClause(if_clause)],
                Span::null(),
            )),
        ],
        Span::null(),
    );

    let offsets: Vec<u32> = stylesheet.errors().iter().map(|error| error.get_position().0).collect();
    assert_eq!(offsets, vec![0, 1, 2, 3, 4, 5, 6]);
    assert!(stylesheet.has_errors());
}

#[test]
fn test_errors_are_additive() {
    let mut declaration = Declaration::new("color", variable("X"), Span::null());
    assert!(!declaration.has_error());

    declaration.add_error(error("X", 1));
    declaration.add_error(error("Y", 2));
    assert_eq!(declaration.get_errors().len(), 2);
}

#[test]
fn test_clean_stylesheet() {
    let stylesheet = Stylesheet::new(
        vec![RootStmt::Stylerule(Stylerule::new(
            Selector::new(SelectorKind::Class, ".card", Span::null()),
            vec![
                BodyStmt::Declaration(Declaration::new("width", Expr::literal(Literal::Pixel(1), Span::null()), Span::null())),
                BodyStmt::VariableAssignment(VariableAssignment::new("B", variable("C"), Span::null())),
            ],
            Span::null(),
        ))],
        Span::null(),
    );

    assert!(!stylesheet.has_errors());
    let stylerule = stylesheet.stylerules().next().unwrap();
    assert_eq!(stylerule.declarations().count(), 1);
}

#[test]
fn test_literal_types() {
    assert_eq!(Literal::Pixel(1).get_type(), ExpressionType::Pixel);
    assert_eq!(Literal::Percentage(1).get_type(), ExpressionType::Percentage);
    assert_eq!(Literal::Color("#fff".to_string()).get_type(), ExpressionType::Color);
    assert_eq!(Literal::Scalar(1).get_type(), ExpressionType::Scalar);
    assert_eq!(Literal::Bool(false).get_type(), ExpressionType::Bool);
}

#[test]
fn test_literal_display() {
    assert_eq!(Literal::Pixel(-4).to_string(), "-4px");
    assert_eq!(Literal::Percentage(50).to_string(), "50%");
    assert_eq!(Literal::Color("#ABCDEF".to_string()).to_string(), "#ABCDEF");
    assert_eq!(Literal::Bool(true).to_string(), "TRUE");
}

#[test]
fn test_describe_types() {
    assert_eq!(ExpressionType::describe(&[ExpressionType::Color]), "color");
    assert_eq!(
        ExpressionType::describe(&[ExpressionType::Pixel, ExpressionType::Percentage]),
        "pixel or percentage"
    );
}
