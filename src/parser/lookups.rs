use std::collections::HashMap;

use crate::{ast::{ast::{BodyStmt, RootStmt}, expressions::Expr}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    Unary,
    Primary
}

pub type RuleHandler = fn(&mut Parser) -> Result<RootStmt, Error>;
pub type StmtHandler = fn(&mut Parser) -> Result<BodyStmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and variables
    parser.nud(TokenKind::Pixel, parse_primary_expr);
    parser.nud(TokenKind::Percentage, parse_primary_expr);
    parser.nud(TokenKind::Scalar, parse_primary_expr);
    parser.nud(TokenKind::Color, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::CapitalIdent, parse_primary_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Body statements
    parser.stmt(TokenKind::LowerIdent, parse_declaration_stmt);
    parser.stmt(TokenKind::CapitalIdent, parse_body_assignment_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);

    // Top level
    parser.rule(TokenKind::CapitalIdent, parse_root_assignment_stmt);
    parser.rule(TokenKind::LowerIdent, parse_stylerule_stmt);
    parser.rule(TokenKind::IdIdent, parse_stylerule_stmt);
    parser.rule(TokenKind::Color, parse_stylerule_stmt);
    parser.rule(TokenKind::ClassIdent, parse_stylerule_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type RuleLookup = HashMap<TokenKind, RuleHandler>;
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
