use crate::{
    ast::{
        ast::{BodyStmt, Declaration, RootStmt, Selector, SelectorKind, Stylerule, Stylesheet, VariableAssignment},
        expressions::{Expr, Literal, Operator},
    },
    Span,
};

use super::generator::generate;

fn literal(value: Literal) -> Expr {
    Expr::literal(value, Span::null())
}

fn stylerule(selector: Selector, body: Vec<BodyStmt>) -> RootStmt {
    RootStmt::Stylerule(Stylerule::new(selector, body, Span::null()))
}

fn declaration(property: &str, value: Expr) -> BodyStmt {
    BodyStmt::Declaration(Declaration::new(property, value, Span::null()))
}

#[test]
fn test_generate_formats_literals() {
    let stylesheet = Stylesheet::new(
        vec![stylerule(
            Selector::new(SelectorKind::Tag, "p", Span::null()),
            vec![
                declaration("width", literal(Literal::Pixel(10))),
                declaration("height", literal(Literal::Percentage(50))),
                declaration("color", literal(Literal::Color("#ff0000".to_string()))),
                declaration("z-index", literal(Literal::Scalar(-3))),
                declaration("visible", literal(Literal::Bool(true))),
                declaration("hidden", literal(Literal::Bool(false))),
            ],
        )],
        Span::null(),
    );

    assert_eq!(
        generate(&stylesheet).unwrap(),
        "p {\n  width: 10px;\n  height: 50%;\n  color: #ff0000;\n  z-index: -3;\n  visible: TRUE;\n  hidden: FALSE;\n}\n\n"
    );
}

#[test]
fn test_generate_multiple_rules() {
    let stylesheet = Stylesheet::new(
        vec![
            stylerule(
                Selector::new(SelectorKind::Id, "#header", Span::null()),
                vec![declaration("width", literal(Literal::Pixel(1)))],
            ),
            RootStmt::VariableAssignment(VariableAssignment::new("Skipped", literal(Literal::Scalar(1)), Span::null())),
            stylerule(Selector::new(SelectorKind::Class, ".card", Span::null()), vec![]),
        ],
        Span::null(),
    );

    assert_eq!(
        generate(&stylesheet).unwrap(),
        "#header {\n  width: 1px;\n}\n\n.card {\n}\n\n"
    );
}

#[test]
fn test_generate_empty_stylesheet() {
    assert_eq!(generate(&Stylesheet::new(vec![], Span::null())).unwrap(), "");
}

#[test]
fn test_generate_is_repeatable() {
    let stylesheet = Stylesheet::new(
        vec![stylerule(
            Selector::new(SelectorKind::Tag, "a", Span::null()),
            vec![declaration("color", literal(Literal::Color("#000".to_string())))],
        )],
        Span::null(),
    );

    assert_eq!(generate(&stylesheet).unwrap(), generate(&stylesheet).unwrap());
}

#[test]
fn test_generate_rejects_unevaluated_declaration() {
    let expression = Expr::operation(
        Operator::Add,
        literal(Literal::Pixel(1)),
        literal(Literal::Pixel(2)),
        Span::null(),
    );
    let stylesheet = Stylesheet::new(
        vec![stylerule(
            Selector::new(SelectorKind::Tag, "p", Span::null()),
            vec![declaration("width", expression)],
        )],
        Span::null(),
    );

    let error = generate(&stylesheet).unwrap_err();
    assert_eq!(error.get_error_name(), "UnevaluatedExpression");
}
