//! Unit tests for the type checker.

use crate::{
    ast::{
        ast::{BodyStmt, Node, Stylesheet},
        expressions::Operator,
        types::ExpressionType,
    },
    config::config::CompilerConfig,
    errors::errors::ErrorImpl,
    parse_source,
};

use super::type_checker::{operation_type, type_check};

fn check_with(source: &str, config: &CompilerConfig) -> Stylesheet {
    let mut stylesheet = parse_source(source, "test.icss", config).unwrap();
    type_check(&mut stylesheet, config).unwrap();
    stylesheet
}

fn check(source: &str) -> Stylesheet {
    check_with(source, &CompilerConfig::default())
}

fn error_names(stylesheet: &Stylesheet) -> Vec<String> {
    stylesheet
        .errors()
        .iter()
        .map(|error| error.get_error_name().to_string())
        .collect()
}

#[test]
fn test_well_typed_stylesheet() {
    let stylesheet = check(
        "LinkColor := #ff0000;\n\
         ParWidth := 500px;\n\
         UseLinkColor := TRUE;\n\
         p { background-color: #ffffff; width: ParWidth; }\n\
         a { color: LinkColor; if [UseLinkColor] { width: ParWidth / 2; } else { height: 50%; } }",
    );

    assert!(!stylesheet.has_errors(), "{:?}", stylesheet.errors());
}

#[test]
fn test_property_type_mismatch() {
    let stylesheet = check("p { color: 1px + 2px; width: #ff0000; }");
    let errors = stylesheet.errors();

    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0].get_impl(),
        &ErrorImpl::PropertyTypeMismatch { property: "color".to_string(), expected: "color".to_string() }
    );
    assert_eq!(
        errors[1].get_impl(),
        &ErrorImpl::PropertyTypeMismatch {
            property: "width".to_string(),
            expected: "pixel or percentage".to_string()
        }
    );
    // Attached to the declaration
    assert_eq!(errors[1].get_position().0, 22);
}

#[test]
fn test_unchecked_property_passes() {
    let stylesheet = check("p { margin: #ff0000; border: TRUE; }");
    assert!(!stylesheet.has_errors());
}

#[test]
fn test_custom_property_rules() {
    let config = CompilerConfig::from_json(r#"{ "property_rules": { "margin": ["pixel"] } }"#).unwrap();

    let stylesheet = check_with("p { margin: 10%; color: 10px; }", &config);
    assert_eq!(error_names(&stylesheet), vec!["PropertyTypeMismatch"]);
}

#[test]
fn test_undefined_variable_on_reference() {
    let stylesheet = check("p { margin: Missing; }");

    let stylerule = stylesheet.stylerules().next().unwrap();
    let declaration = stylerule.declarations().next().unwrap();
    assert!(!declaration.has_error());
    assert_eq!(
        declaration.expression.get_errors()[0].get_impl(),
        &ErrorImpl::VariableNotDeclared { variable: "Missing".to_string() }
    );
}

#[test]
fn test_reference_before_assignment_in_same_scope() {
    let stylesheet = check("p { width: Size; Size := 1px; }");
    assert_eq!(error_names(&stylesheet), vec!["PropertyTypeMismatch", "VariableNotDeclared"]);

    let stylesheet = check("p { margin: Size; Size := 1px; }");
    assert_eq!(error_names(&stylesheet), vec!["VariableNotDeclared"]);

    // A later top-level assignment is not visible to an earlier rule either
    let stylesheet = check("p { margin: Size; }
Size := 1px;");
    assert_eq!(error_names(&stylesheet), vec!["VariableNotDeclared"]);
}

#[test]
fn test_undefined_operands_report_only_the_reference() {
    let stylesheet = check("p { margin: Missing + Missing; }");
    assert_eq!(error_names(&stylesheet), vec!["VariableNotDeclared", "VariableNotDeclared"]);

    let stylesheet = check("p { width: Missing * 2; }");
    assert_eq!(error_names(&stylesheet), vec!["PropertyTypeMismatch", "VariableNotDeclared"]);
}

#[test]
fn test_variables_do_not_leak_between_stylerules() {
    let stylesheet = check("p { Local := 10px; width: Local; }\na { width: Local; }");

    assert_eq!(error_names(&stylesheet), vec!["PropertyTypeMismatch", "VariableNotDeclared"]);
    // Both errors belong to the second rule
    assert!(stylesheet.errors().iter().all(|error| error.get_position().0 > 35));
}

#[test]
fn test_later_assignment_overwrites() {
    let stylesheet = check("Size := #ffffff;\nSize := 10px;\np { width: Size; }");
    assert!(!stylesheet.has_errors());
}

#[test]
fn test_shadowing_in_if_body() {
    let stylesheet = check(
        "Size := 10px;\np { if [TRUE] { Size := #ff0000; color: Size; } width: Size; }",
    );
    assert!(!stylesheet.has_errors(), "{:?}", stylesheet.errors());
}

#[test]
fn test_if_and_else_do_not_share_scope() {
    let stylesheet = check("p { if [TRUE] { Inner := 1px; } else { width: Inner; } }");
    assert_eq!(error_names(&stylesheet), vec!["PropertyTypeMismatch", "VariableNotDeclared"]);
}

#[test]
fn test_non_boolean_condition_on_clause() {
    let stylesheet = check("p { if [10px] { width: 1px; } }");

    let stylerule = stylesheet.stylerules().next().unwrap();
    match &stylerule.body[0] {
        BodyStmt::IfClause(if_clause) => {
            assert_eq!(
                if_clause.get_errors()[0].get_impl(),
                &ErrorImpl::NonBooleanCondition { received: "pixel".to_string() }
            );
            assert!(!if_clause.condition.has_error());
        }
        other => panic!("unexpected statement {:?}", other),
    }
}

#[test]
fn test_operator_errors() {
    let stylesheet = check("p { a: 10px + 50%; b: #fff + #000; c: 2px * 3px; d: 2 * 10px; }");
    assert_eq!(
        error_names(&stylesheet),
        vec!["OperandTypeMismatch", "ColorInOperation", "MissingScalarOperand"]
    );
}

#[test]
fn test_every_error_is_collected() {
    let stylesheet = check(
        "p { color: Missing + 1px; }\na { if [2] { width: #fff * 2; } }",
    );
    assert_eq!(
        error_names(&stylesheet),
        vec![
            "PropertyTypeMismatch",
            "OperandTypeMismatch",
            "VariableNotDeclared",
            "NonBooleanCondition",
            "PropertyTypeMismatch",
            "ColorInOperation",
        ]
    );
}

#[test]
fn test_operation_type_rules() {
    use ExpressionType::*;

    assert_eq!(operation_type(Operator::Add, Pixel, Pixel), Ok(Pixel));
    assert_eq!(operation_type(Operator::Subtract, Percentage, Percentage), Ok(Percentage));
    assert_eq!(operation_type(Operator::Add, Scalar, Scalar), Ok(Scalar));
    assert_eq!(operation_type(Operator::Multiply, Scalar, Pixel), Ok(Pixel));
    assert_eq!(operation_type(Operator::Multiply, Percentage, Scalar), Ok(Percentage));
    assert_eq!(operation_type(Operator::Divide, Scalar, Scalar), Ok(Scalar));
    assert_eq!(operation_type(Operator::Add, Undefined, Undefined), Ok(Undefined));
    assert_eq!(operation_type(Operator::Multiply, Undefined, Scalar), Ok(Undefined));
    assert_eq!(operation_type(Operator::Add, Color, Color), Err(ErrorImpl::ColorInOperation));
    assert_eq!(operation_type(Operator::Multiply, Scalar, Color), Err(ErrorImpl::ColorInOperation));
    assert_eq!(
        operation_type(Operator::Divide, Pixel, Pixel),
        Err(ErrorImpl::MissingScalarOperand { operation: "division".to_string() })
    );
    assert_eq!(
        operation_type(Operator::Add, Pixel, Scalar),
        Err(ErrorImpl::OperandTypeMismatch { left: "pixel".to_string(), right: "scalar".to_string() })
    );
}

#[test]
fn test_nesting_limit() {
    let config = CompilerConfig { max_nesting_depth: 2, ..CompilerConfig::default() };
    let mut stylesheet = parse_source("p { if [TRUE] { } }", "test.icss", &CompilerConfig::default()).unwrap();
    assert!(type_check(&mut stylesheet, &config).is_ok());

    let mut stylesheet =
        parse_source("p { if [TRUE] { if [TRUE] { } } }", "test.icss", &CompilerConfig::default()).unwrap();
    let error = type_check(&mut stylesheet, &config).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
}

#[test]
fn test_expression_depth_limit() {
    let config = CompilerConfig { max_expression_depth: 2, ..CompilerConfig::default() };

    let mut stylesheet = parse_source("p { width: 1px + 1px + 1px; }", "test.icss", &CompilerConfig::default()).unwrap();
    assert!(type_check(&mut stylesheet, &config).is_ok());

    let mut stylesheet =
        parse_source("p { width: 1px + 1px + 1px + 1px; }", "test.icss", &CompilerConfig::default()).unwrap();
    let error = type_check(&mut stylesheet, &config).unwrap_err();
    assert_eq!(error.get_error_name(), "ExpressionTooDeep");
}
