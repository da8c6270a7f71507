use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

impl RegexPattern {
    /// Patterns are anchored so they only ever match at the lexer position.
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
            handler
        }
    }
}

lazy_static! {
    // First match wins, so longer operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("\\s+", skip_handler),
        RegexPattern::new("//[^\\n]*", skip_handler),
        RegexPattern::new("(?s)/\\*.*?\\*/", skip_handler),
        RegexPattern::new("[0-9]+(px|%)?", number_handler),
        RegexPattern::new("#[a-zA-Z0-9_-]+", hash_handler),
        RegexPattern::new("\\.[a-zA-Z_-][a-zA-Z0-9_-]*", class_handler),
        RegexPattern::new("[a-z][a-z0-9-]*", symbol_handler),
        RegexPattern::new("[A-Z][A-Za-z0-9_]*", symbol_handler),
        RegexPattern::new(":=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, ":=")),
        RegexPattern::new(":", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        RegexPattern::new(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new("\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        RegexPattern::new("\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        RegexPattern::new("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Rc<String>) -> Lexer {
        Lexer {
            tokens: vec![],
            source: String::from(source),
            pos: 0,
            file,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span of the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn push_matched(&mut self, kind: TokenKind, matched: String) {
        let span = self.span_of(matched.len());
        let len = matched.len();
        self.push(MK_TOKEN!(kind, matched, span));
        self.advance_n(len);
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let kind = if matched.ends_with("px") {
        TokenKind::Pixel
    } else if matched.ends_with('%') {
        TokenKind::Percentage
    } else {
        TokenKind::Scalar
    };

    lexer.push_matched(kind, matched);
    Ok(())
}

/// `#abc` and `#aabbcc` are colors, any other `#name` is an id selector.
fn hash_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let digits = &matched[1..];
    let is_color = (digits.len() == 3 || digits.len() == 6)
        && digits.chars().all(|c| c.is_ascii_hexdigit());

    let kind = if is_color { TokenKind::Color } else { TokenKind::IdIdent };
    lexer.push_matched(kind, matched);
    Ok(())
}

fn class_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.push_matched(TokenKind::ClassIdent, matched);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);

    let kind = if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        *kind
    } else if value.starts_with(|c: char| c.is_ascii_uppercase()) {
        TokenKind::CapitalIdent
    } else {
        TokenKind::LowerIdent
    };

    lexer.push_matched(kind, value);
    Ok(())
}

pub fn tokenize(source: &str, file: Rc<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let start = lex.pos;
        let pattern = PATTERNS.iter().find(|pattern| pattern.regex.is_match(lex.remainder()));

        if let Some(pattern) = pattern {
            (pattern.handler)(&mut lex, &pattern.regex)?;
        }

        if lex.pos == start {
            return Err(Error::new(ErrorImpl::UnrecognisedToken { token: lex.at().to_string() }, lex.position()));
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    Ok(lex.tokens)
}
