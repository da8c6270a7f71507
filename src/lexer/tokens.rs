use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("TRUE", TokenKind::True);
        map.insert("FALSE", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Literals
    Pixel,      // 10px
    Percentage, // 50%
    Scalar,     // 3
    Color,      // #ff0000

    // Identifiers
    LowerIdent,   // width, div
    CapitalIdent, // LinkColor
    IdIdent,      // #header
    ClassIdent,   // .card

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // :=
    Colon,
    Semicolon,

    Plus,
    Dash,
    Star,
    Slash,

    // Reserved
    If,
    Else,
    True,
    False,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}
