use std::fmt::Debug;

use crate::{errors::errors::Error, Span, IMPL_NODE};

use super::expressions::Expr;

/// Node Trait
///
/// Every AST node has a span and may carry semantic errors. Errors are only
/// ever appended, so annotations from different passes never overwrite each other.
pub trait Node: Debug {
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
    /// Returns the errors attached to this node (not its children).
    fn get_errors(&self) -> &[Error];
    /// Attaches an error to this node.
    fn add_error(&mut self, error: Error);
    /// Whether this node itself carries an error.
    fn has_error(&self) -> bool {
        !self.get_errors().is_empty()
    }
}

/// Root of the tree. Owns every other node.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub body: Vec<RootStmt>,
    pub span: Span,
    pub errors: Vec<Error>,
}

impl Stylesheet {
    pub fn new(body: Vec<RootStmt>, span: Span) -> Self {
        Stylesheet {
            body,
            span,
            errors: vec![],
        }
    }

    /// All errors attached anywhere in the tree, in pre-order.
    pub fn errors(&self) -> Vec<&Error> {
        let mut out = vec![];
        out.extend(self.errors.iter());
        for stmt in self.body.iter() {
            match stmt {
                RootStmt::VariableAssignment(assignment) => assignment.collect_errors(&mut out),
                RootStmt::Stylerule(stylerule) => stylerule.collect_errors(&mut out),
            }
        }
        out
    }

    pub fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    pub fn stylerules(&self) -> impl Iterator<Item = &Stylerule> {
        self.body.iter().filter_map(|stmt| match stmt {
            RootStmt::Stylerule(stylerule) => Some(stylerule),
            _ => None,
        })
    }
}

/// Top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum RootStmt {
    VariableAssignment(VariableAssignment),
    Stylerule(Stylerule),
}

/// Statement allowed inside a stylerule, if or else body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyStmt {
    Declaration(Declaration),
    VariableAssignment(VariableAssignment),
    IfClause(IfClause),
}

fn collect_body_errors<'a>(body: &'a [BodyStmt], out: &mut Vec<&'a Error>) {
    for stmt in body {
        match stmt {
            BodyStmt::Declaration(declaration) => {
                out.extend(declaration.errors.iter());
                declaration.expression.collect_errors(out);
            }
            BodyStmt::VariableAssignment(assignment) => assignment.collect_errors(out),
            BodyStmt::IfClause(if_clause) => {
                out.extend(if_clause.errors.iter());
                if_clause.condition.collect_errors(out);
                collect_body_errors(&if_clause.body, out);
                if let Some(else_clause) = &if_clause.else_clause {
                    out.extend(else_clause.errors.iter());
                    collect_body_errors(&else_clause.body, out);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stylerule {
    pub selector: Selector,
    pub body: Vec<BodyStmt>,
    pub span: Span,
    pub errors: Vec<Error>,
}

impl Stylerule {
    pub fn new(selector: Selector, body: Vec<BodyStmt>, span: Span) -> Self {
        Stylerule {
            selector,
            body,
            span,
            errors: vec![],
        }
    }

    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.body.iter().filter_map(|stmt| match stmt {
            BodyStmt::Declaration(declaration) => Some(declaration),
            _ => None,
        })
    }

    fn collect_errors<'a>(&'a self, out: &mut Vec<&'a Error>) {
        out.extend(self.errors.iter());
        out.extend(self.selector.errors.iter());
        collect_body_errors(&self.body, out);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// `div`
    Tag,
    /// `#header`
    Id,
    /// `.card`
    Class,
}

/// Selector with its raw source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub kind: SelectorKind,
    pub text: String,
    pub span: Span,
    pub errors: Vec<Error>,
}

impl Selector {
    pub fn new(kind: SelectorKind, text: &str, span: Span) -> Self {
        Selector {
            kind,
            text: String::from(text),
            span,
            errors: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub expression: Expr,
    pub span: Span,
    pub errors: Vec<Error>,
}

impl Declaration {
    pub fn new(property: &str, expression: Expr, span: Span) -> Self {
        Declaration {
            property: String::from(property),
            expression,
            span,
            errors: vec![],
        }
    }
}

/// `Name := expression;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub name: String,
    pub expression: Expr,
    pub span: Span,
    pub errors: Vec<Error>,
}

impl VariableAssignment {
    pub fn new(name: &str, expression: Expr, span: Span) -> Self {
        VariableAssignment {
            name: String::from(name),
            expression,
            span,
            errors: vec![],
        }
    }

    fn collect_errors<'a>(&'a self, out: &mut Vec<&'a Error>) {
        out.extend(self.errors.iter());
        self.expression.collect_errors(out);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub condition: Expr,
    pub body: Vec<BodyStmt>,
    pub else_clause: Option<ElseClause>,
    pub span: Span,
    pub errors: Vec<Error>,
}

impl IfClause {
    pub fn new(condition: Expr, body: Vec<BodyStmt>, else_clause: Option<ElseClause>, span: Span) -> Self {
        IfClause {
            condition,
            body,
            else_clause,
            span,
            errors: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseClause {
    pub body: Vec<BodyStmt>,
    pub span: Span,
    pub errors: Vec<Error>,
}

impl ElseClause {
    pub fn new(body: Vec<BodyStmt>, span: Span) -> Self {
        ElseClause {
            body,
            span,
            errors: vec![],
        }
    }
}

IMPL_NODE!(Stylesheet);
IMPL_NODE!(Stylerule);
IMPL_NODE!(Selector);
IMPL_NODE!(Declaration);
IMPL_NODE!(VariableAssignment);
IMPL_NODE!(IfClause);
IMPL_NODE!(ElseClause);
IMPL_NODE!(Expr);
