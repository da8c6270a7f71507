use crate::{ast::expressions::{Expr, ExprKind, Literal, Operator}, errors::errors::{Error, ErrorImpl}, lexer::tokens::{Token, TokenKind}, Span};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("expected an expression")),
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than the caller, keep extending lhs
    while parser.current_bp() > bp {
        let token_kind = parser.current_token_kind();
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => return Err(parser.unexpected("expected an operator")),
        };

        let current_bp = parser.current_bp();
        left = led(parser, left, current_bp)?;
    }

    Ok(left)
}

/// Parses the numeric part of a dimensioned literal token (`10px`, `50%`, `3`).
fn parse_magnitude(token: &Token, suffix: &str) -> Result<i64, Error> {
    token
        .value
        .strip_suffix(suffix)
        .unwrap_or(&token.value)
        .parse::<i64>()
        .map_err(|_| Error::new(ErrorImpl::NumberParseError { token: token.value.clone() }, token.span.start.clone()))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let literal = match parser.current_token_kind() {
        TokenKind::Pixel => Literal::Pixel(parse_magnitude(parser.current_token(), "px")?),
        TokenKind::Percentage => Literal::Percentage(parse_magnitude(parser.current_token(), "%")?),
        TokenKind::Scalar => Literal::Scalar(parse_magnitude(parser.current_token(), "")?),
        TokenKind::Color => Literal::Color(parser.current_token().value.clone()),
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        TokenKind::CapitalIdent => {
            let token = parser.advance();
            return Ok(Expr::variable(&token.value, token.span));
        }
        _ => {
            return Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()));
        }
    };

    let token = parser.advance();
    Ok(Expr::literal(literal, token.span))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    // Chains grow one level per operator, stop before the tree gets too deep to walk
    parser.check_expression_depth(left.depth() + 1, left.span.start.clone())?;

    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::Plus => Operator::Add,
        TokenKind::Dash => Operator::Subtract,
        TokenKind::Star => Operator::Multiply,
        TokenKind::Slash => Operator::Divide,
        _ => return Err(Error::new(ErrorImpl::UnexpectedToken { token: operator_token.value.clone() }, operator_token.span.start.clone())),
    };

    let right = parse_expr(parser, bp)?;

    let span = Span {
        start: left.span.start.clone(),
        end: right.span.end.clone(),
    };
    let expr = Expr::operation(operator, left, right, span);
    parser.check_expression_depth(expr.depth(), expr.span.start.clone())?;

    Ok(expr)
}

/// `-x`. Numeric literals are negated in place, anything else becomes `-1 * x`.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    parser.enter_nesting()?;
    let rhs = parse_expr(parser, BindingPower::Unary)?;
    parser.exit_nesting();

    let span = Span {
        start: operator_token.span.start.clone(),
        end: rhs.span.end.clone(),
    };

    let negated = match &rhs.kind {
        ExprKind::Literal(Literal::Pixel(value)) => Some(Literal::Pixel(value.wrapping_neg())),
        ExprKind::Literal(Literal::Percentage(value)) => Some(Literal::Percentage(value.wrapping_neg())),
        ExprKind::Literal(Literal::Scalar(value)) => Some(Literal::Scalar(value.wrapping_neg())),
        _ => None,
    };

    match negated {
        Some(literal) => Ok(Expr::literal(literal, span)),
        None => {
            parser.check_expression_depth(rhs.depth() + 1, operator_token.span.start.clone())?;
            let minus_one = Expr::literal(Literal::Scalar(-1), operator_token.span.clone());
            Ok(Expr::operation(Operator::Multiply, minus_one, rhs, span))
        }
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    parser.enter_nesting()?;

    let expr = parse_expr(parser, BindingPower::Default)?;

    let error = parser.unexpected("expected `)` to close the group");
    parser.expect_error(TokenKind::CloseParen, Some(error))?;
    parser.exit_nesting();

    Ok(expr)
}
