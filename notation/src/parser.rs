//! Parser for the constraint notation.

use ward_constraint::Constraint;
use ward_core::DataKind;
use ward_registry::Registry;

use crate::lexer::{Lexer, Token, TokenKind};
use crate::{ConstraintNode, NotationError, NotationResult, Span};

// ==================== PARSER STATE ====================

/// Parser state.
///
/// Drives the lexer directly: whether the next token is structural or a
/// parameter depends on where the parser is in a group.
pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            lexer: Lexer::new(input),
        }
    }

    /// Parse every group in the input.
    pub fn parse_nodes(&mut self) -> NotationResult<Vec<ConstraintNode>> {
        let mut nodes = Vec::new();
        loop {
            let token = self.lexer.next_token().map_err(|e| self.at_top_level(e))?;
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::LBracket => nodes.push(self.parse_group(token.span)?),
                _ => {
                    let err = NotationError::unexpected(token.span, "'['", token.kind.name(), "");
                    return Err(self.at_top_level(err));
                }
            }
        }
        Ok(nodes)
    }
}

// ==================== GROUPS ====================

impl Parser<'_> {
    fn parse_group(&mut self, open: Span) -> NotationResult<ConstraintNode> {
        let token = self.next_in_group(open)?;
        let name = match token.kind {
            TokenKind::Name(name) => name,
            _ => return Err(self.mismatch(open, "constraint name", token)),
        };

        let mut params = Vec::new();
        let token = self.next_in_group(open)?;
        match token.kind {
            TokenKind::RBracket => {
                return Ok(ConstraintNode::new(name, params, self.group_span(open)));
            }
            TokenKind::LParen => {}
            _ => return Err(self.mismatch(open, "'(' or ']'", token)),
        }

        let mut first = true;
        loop {
            let param = self
                .lexer
                .next_param(first)
                .map_err(|e| self.in_group(open, e))?;
            first = false;
            match param.kind {
                TokenKind::Param(text) => params.push(text),
                // `()`: no parameters
                _ => break,
            }

            let token = self.next_in_group(open)?;
            match token.kind {
                TokenKind::Comma => continue,
                TokenKind::RParen => break,
                _ => return Err(self.mismatch(open, "',' or ')'", token)),
            }
        }

        let token = self.next_in_group(open)?;
        match token.kind {
            TokenKind::RBracket => Ok(ConstraintNode::new(name, params, self.group_span(open))),
            _ => Err(self.mismatch(open, "']'", token)),
        }
    }

    fn next_in_group(&mut self, open: Span) -> NotationResult<Token> {
        self.lexer.next_token().map_err(|e| self.in_group(open, e))
    }

    fn group_span(&self, open: Span) -> Span {
        Span::new(open.start, self.lexer.current_span().start, open.line, open.column)
    }
}

// ==================== ERRORS ====================

impl Parser<'_> {
    fn mismatch(&self, open: Span, expected: &str, found: Token) -> NotationError {
        let err = if found.kind == TokenKind::Eof {
            NotationError::unexpected_eof(found.span, expected, "")
        } else {
            NotationError::unexpected(found.span, expected, found.kind.name(), "")
        };
        self.in_group(open, err)
    }

    /// Point the error at the whole group: from `[` through the next `]` at
    /// or after the failure, or to the end of input.
    fn in_group(&self, open: Span, mut err: NotationError) -> NotationError {
        let at = err.span.start.max(open.start);
        let end = self.input[at..]
            .find(']')
            .map(|i| at + i + 1)
            .unwrap_or(self.input.len());
        err.fragment = self.input[open.start..end].to_string();
        err
    }

    /// Point the error at the stray text, up to the next `[`.
    fn at_top_level(&self, mut err: NotationError) -> NotationError {
        let at = err.span.start;
        let end = self.input[at..]
            .find('[')
            .map(|i| at + i)
            .unwrap_or(self.input.len());
        err.fragment = self.input[at..end].trim_end().to_string();
        err
    }
}

// ==================== ENTRY POINTS ====================

/// Parse notation text into unresolved groups.
pub fn parse_nodes(text: &str) -> NotationResult<Vec<ConstraintNode>> {
    Parser::new(text).parse_nodes()
}

/// Parse notation text into configured constraints, in order.
///
/// Each name is resolved through `registry` and the new instance is
/// configured with `set_parameters(params, kind)`. Any failure aborts the
/// whole parse.
pub fn parse(
    text: &str,
    kind: DataKind,
    registry: &Registry,
) -> NotationResult<Vec<Box<dyn Constraint>>> {
    let nodes = parse_nodes(text)?;
    let mut constraints = Vec::with_capacity(nodes.len());

    for node in nodes {
        let fragment = &text[node.span.start..node.span.end];
        let mut constraint = registry.create(&node.name).map_err(|e| {
            NotationError::new(
                format!("unknown constraint '{}'", node.name),
                node.span,
                fragment,
            )
            .with_source(e)
        })?;
        constraint.set_parameters(&node.params, kind).map_err(|e| {
            NotationError::new(
                format!("invalid configuration for '{}'", node.name),
                node.span,
                fragment,
            )
            .with_source(e)
        })?;
        constraints.push(constraint);
    }

    tracing::debug!(count = constraints.len(), kind = %kind, "parsed constraint notation");
    Ok(constraints)
}
