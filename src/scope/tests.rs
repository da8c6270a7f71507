use crate::ast::types::ExpressionType;

use super::scope_stack::ScopeStack;

#[test]
fn test_resolve_innermost_first() {
    let mut scopes = ScopeStack::new();
    scopes.enter_scope();
    scopes.define("Size", ExpressionType::Pixel).unwrap();

    scopes.enter_scope();
    scopes.define("Size", ExpressionType::Percentage).unwrap();
    assert_eq!(scopes.resolve("Size"), Some(&ExpressionType::Percentage));

    scopes.exit_scope().unwrap();
    assert_eq!(scopes.resolve("Size"), Some(&ExpressionType::Pixel));
}

#[test]
fn test_outer_bindings_visible_in_nested_scopes() {
    let mut scopes = ScopeStack::new();
    scopes.enter_scope();
    scopes.define("Color", "#ffffff").unwrap();
    scopes.enter_scope();
    scopes.enter_scope();

    assert_eq!(scopes.resolve("Color"), Some(&"#ffffff"));
    assert_eq!(scopes.depth(), 3);
}

#[test]
fn test_define_overwrites_in_same_frame() {
    let mut scopes = ScopeStack::new();
    scopes.enter_scope();
    scopes.define("A", 1).unwrap();
    scopes.define("A", 2).unwrap();

    assert_eq!(scopes.resolve("A"), Some(&2));
}

#[test]
fn test_bindings_dropped_on_exit() {
    let mut scopes = ScopeStack::new();
    scopes.enter_scope();
    scopes.enter_scope();
    scopes.define("Inner", 1).unwrap();
    scopes.exit_scope().unwrap();

    assert_eq!(scopes.resolve("Inner"), None);
}

#[test]
fn test_underflow() {
    let mut scopes: ScopeStack<i64> = ScopeStack::new();

    assert_eq!(scopes.exit_scope().unwrap_err().get_error_name(), "ScopeUnderflow");
    assert_eq!(scopes.define("A", 1).unwrap_err().get_error_name(), "ScopeUnderflow");
    assert_eq!(scopes.resolve("A"), None);
}
