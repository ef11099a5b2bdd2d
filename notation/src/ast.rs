//! Syntax tree for the constraint notation.

/// Source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// One `[Name(params)]` group, before it is resolved through a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintNode {
    pub name: String,
    pub params: Vec<String>,
    /// The whole bracketed group.
    pub span: Span,
}

impl ConstraintNode {
    pub fn new(name: impl Into<String>, params: Vec<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            params,
            span,
        }
    }
}
