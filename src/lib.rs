#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Stylesheet,
    config::config::CompilerConfig,
    errors::errors::{Error, ErrorTip},
    evaluator::evaluator::evaluate,
    generator::generator::generate,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope;
pub mod type_checker;

extern crate regex;

/// Byte offset into a named source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Returns the 1-based line number, the line text and the column of `position` in `source`.
///
/// Positions past the end of the source point at the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // Only reached for an offset at EOF
    let last = source.split_inclusive('\n').last().unwrap_or("");
    if last.ends_with('\n') || last.is_empty() {
        (line_number, String::new(), 0)
    } else {
        (line_number - 1, last.to_string(), last.len())
    }
}

/// Renders a diagnostic with the offending source line and a caret under the column.
///
/// ```text
/// Error: PropertyTypeMismatch (Property color requires a color value)
/// -> main.icss:20:8
///    |
/// 20 | color: 10px;
///    | -------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}:{}:{}\n", position.1, line, line_pos + 1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}

/// Runs the whole pipeline on ICSS source text and returns the generated CSS.
///
/// Semantic errors are collected exhaustively; a syntax or structural failure
/// is returned on its own.
#[tracing::instrument(skip(source, config))]
pub fn compile(source: &str, file: &str, config: &CompilerConfig) -> Result<String, Vec<Error>> {
    let mut ast = parse_source(source, file, config).map_err(|e| vec![e])?;

    type_check(&mut ast, config).map_err(|e| vec![e])?;
    if ast.has_errors() {
        return Err(ast.errors().into_iter().cloned().collect());
    }

    evaluate(&mut ast, config).map_err(|e| vec![e])?;
    generate(&ast).map_err(|e| vec![e])
}

/// Tokenizes and parses `source` into a stylesheet.
pub fn parse_source(source: &str, file: &str, config: &CompilerConfig) -> Result<Stylesheet, Error> {
    let file = Rc::new(String::from(file));
    let tokens = tokenize(source, Rc::clone(&file))?;
    parse(tokens, file, config)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        config::config::CompilerConfig,
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\n\nfoo\nTesting { }\n";
        let (line_number, line, line_pos) = super::get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 27);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_eof() {
        let (line_number, line, line_pos) = super::get_line_at_position("a {\n}", 5);
        assert_eq!(line_number, 2);
        assert_eq!(line, "}");
        assert_eq!(line_pos, 1);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "p {\n  color: 10px;\n}\n";
        let error = Error::new(
            ErrorImpl::PropertyTypeMismatch {
                property: "color".to_string(),
                expected: "color".to_string(),
            },
            Position(6, Rc::new("main.icss".to_string())),
        );

        let rendered = super::render_error(&error, source);
        assert!(rendered.starts_with("Error: PropertyTypeMismatch (Property color requires a color value)"));
        assert!(rendered.contains("-> main.icss:2:3"));
        assert!(rendered.contains("2 | color: 10px;"));
        assert!(rendered.ends_with("  | ^\n"));
    }

    #[test]
    fn test_compile_end_to_end() {
        let css = super::compile(
            "Base := 10px;\np { width: Base * 2; }",
            "test.icss",
            &CompilerConfig::default(),
        )
        .unwrap();
        assert_eq!(css, "p {\n  width: 20px;\n}\n\n");
    }

    #[test]
    fn test_compile_reports_every_semantic_error() {
        let errors = super::compile(
            "p { color: 10px; width: #ff0000; height: Missing; }",
            "test.icss",
            &CompilerConfig::default(),
        )
        .unwrap_err();
        let names: Vec<&str> = errors.iter().map(|e| e.get_error_name()).collect();
        assert_eq!(
            names,
            vec![
                "PropertyTypeMismatch",
                "PropertyTypeMismatch",
                "PropertyTypeMismatch",
                "VariableNotDeclared"
            ]
        );
    }
}
