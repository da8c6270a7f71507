use crate::{ast::ast::{BodyStmt, Declaration, ElseClause, IfClause, RootStmt, Selector, SelectorKind, Stylerule, VariableAssignment}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind, parser::{expr::parse_expr, lookups::BindingPower}};

use super::parser::Parser;

pub fn parse_root_stmt(parser: &mut Parser) -> Result<RootStmt, Error> {
    match parser.get_rule_lookup().get(&parser.current_token_kind()) {
        Some(rule) => {
            let rule = *rule;
            rule(parser)
        }
        None => Err(parser.unexpected("expected a stylerule or variable assignment")),
    }
}

pub fn parse_stmt(parser: &mut Parser) -> Result<BodyStmt, Error> {
    match parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        Some(stmt) => {
            let stmt = *stmt;
            stmt(parser)
        }
        None => Err(parser.unexpected("expected a declaration, variable assignment or if clause")),
    }
}

/// Parses `{ stmt* }` and returns the statements.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<BodyStmt>, Error> {
    let error = parser.unexpected("expected `{`");
    parser.expect_error(TokenKind::OpenCurly, Some(error))?;
    parser.enter_nesting()?;

    let mut body = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected("expected `}`"));
        }
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    parser.exit_nesting();

    Ok(body)
}

pub fn parse_stylerule_stmt(parser: &mut Parser) -> Result<RootStmt, Error> {
    let selector_token = parser.advance();
    let kind = match selector_token.kind {
        TokenKind::LowerIdent => SelectorKind::Tag,
        // `#abc` lexes as a color but is a valid id selector here
        TokenKind::IdIdent | TokenKind::Color => SelectorKind::Id,
        TokenKind::ClassIdent => SelectorKind::Class,
        _ => return Err(Error::new(ErrorImpl::UnexpectedToken { token: selector_token.value.clone() }, selector_token.span.start.clone())),
    };
    let selector = Selector::new(kind, &selector_token.value, selector_token.span.clone());

    let body = parse_block(parser)?;

    Ok(RootStmt::Stylerule(Stylerule::new(
        selector,
        body,
        parser.span_from(selector_token.span.start),
    )))
}

pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<BodyStmt, Error> {
    let property = parser.advance();

    let error = parser.unexpected("expected `:` after property name");
    parser.expect_error(TokenKind::Colon, Some(error))?;

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(BodyStmt::Declaration(Declaration::new(
        &property.value,
        expression,
        parser.span_from(property.span.start),
    )))
}

fn parse_variable_assignment(parser: &mut Parser) -> Result<VariableAssignment, Error> {
    let error = parser.unexpected("expected variable name");
    let name = parser.expect_error(TokenKind::CapitalIdent, Some(error))?;

    let error = parser.unexpected("expected `:=` after variable name");
    parser.expect_error(TokenKind::Assignment, Some(error))?;

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(VariableAssignment::new(&name.value, expression, parser.span_from(name.span.start)))
}

pub fn parse_root_assignment_stmt(parser: &mut Parser) -> Result<RootStmt, Error> {
    Ok(RootStmt::VariableAssignment(parse_variable_assignment(parser)?))
}

pub fn parse_body_assignment_stmt(parser: &mut Parser) -> Result<BodyStmt, Error> {
    Ok(BodyStmt::VariableAssignment(parse_variable_assignment(parser)?))
}

/// `if [cond] { ... } else { ... }`. The brackets may be left out, so
/// `if (cond)` and `if cond` parse as well.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<BodyStmt, Error> {
    let if_token = parser.expect(TokenKind::If)?;

    let condition = if parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance();
        let condition = parse_expr(parser, BindingPower::Default)?;
        let error = parser.unexpected("expected `]` after if condition");
        parser.expect_error(TokenKind::CloseBracket, Some(error))?;
        condition
    } else {
        parse_expr(parser, BindingPower::Default)?
    };

    let body = parse_block(parser)?;

    let else_clause = if parser.current_token_kind() == TokenKind::Else {
        let else_token = parser.advance();
        let body = parse_block(parser)?;
        Some(ElseClause::new(body, parser.span_from(else_token.span.start)))
    } else {
        None
    };

    Ok(BodyStmt::IfClause(IfClause::new(
        condition,
        body,
        else_clause,
        parser.span_from(if_token.span.start),
    )))
}
