//! Lexer for the constraint notation.
//!
//! The notation has two lexical modes. Between parameters the lexer skips
//! whitespace and recognizes brackets, parentheses, commas and names. At the
//! start of a parameter a `'` (possibly after whitespace) opens a quoted
//! string; anything else is a bare token, kept verbatim up to the next `,`,
//! `)` or `]`.

use crate::{NotationError, NotationResult, Span};

/// Token types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Constraint name.
    Name(String),
    /// One parameter, unquoted.
    Param(String),

    LBracket, // [
    RBracket, // ]
    LParen,   // (
    RParen,   // )
    Comma,    // ,

    // End of input
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Name(_) => "name",
            TokenKind::Param(_) => "parameter",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Tokenize all input, switching to parameter mode inside parentheses.
    pub fn tokenize(mut self) -> NotationResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut in_params = false;
        let mut param_next = None;
        loop {
            let token = match param_next.take() {
                Some(first) => self.next_param(first)?,
                None => self.next_token()?,
            };
            match token.kind {
                TokenKind::LParen => {
                    in_params = true;
                    param_next = Some(true);
                }
                TokenKind::Comma if in_params => param_next = Some(false),
                TokenKind::RParen | TokenKind::RBracket => in_params = false,
                _ => {}
            }
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    pub fn current_span(&self) -> Span {
        Span::new(self.pos, self.pos, self.line, self.column)
    }

    fn span_from(&self, start: usize, start_line: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_line, start_col)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Next structural token, skipping whitespace.
    pub fn next_token(&mut self) -> NotationResult<Token> {
        self.skip_whitespace();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let Some(c) = self.next_char() else {
            return Ok(Token::new(TokenKind::Eof, self.current_span()));
        };

        let kind = match c {
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            c if c.is_ascii_alphabetic() => self.scan_name(start),
            _ => {
                return Err(NotationError::new(
                    format!("unexpected character '{}'", c),
                    self.span_from(start, start_line, start_col),
                    c.to_string(),
                ));
            }
        };

        Ok(Token::new(kind, self.span_from(start, start_line, start_col)))
    }

    /// Next parameter.
    ///
    /// With `first` set (directly after `(`), a `)` yields the closing
    /// parenthesis: the list is empty. Otherwise a delimiter right here means
    /// an empty bare parameter; the delimiter itself is left for
    /// `next_token`. Whitespace is skipped only in front of a quote.
    pub fn next_param(&mut self, first: bool) -> NotationResult<Token> {
        if self.input[self.pos..].trim_start().starts_with('\'') {
            self.skip_whitespace();
        }

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        match self.peek_char() {
            Some(')') if first => {
                self.next_char();
                Ok(Token::new(
                    TokenKind::RParen,
                    self.span_from(start, start_line, start_col),
                ))
            }
            Some('\'') => {
                self.next_char();
                let text = self.scan_quoted(start, start_line, start_col)?;
                Ok(Token::new(
                    TokenKind::Param(text),
                    self.span_from(start, start_line, start_col),
                ))
            }
            _ => {
                while let Some(c) = self.peek_char() {
                    if matches!(c, ',' | ')' | ']') {
                        break;
                    }
                    self.next_char();
                }
                let text = self.input[start..self.pos].to_string();
                Ok(Token::new(
                    TokenKind::Param(text),
                    self.span_from(start, start_line, start_col),
                ))
            }
        }
    }

    fn scan_name(&mut self, start: usize) -> TokenKind {
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() {
                self.next_char();
            } else {
                break;
            }
        }
        TokenKind::Name(self.input[start..self.pos].to_string())
    }

    /// Body of a quoted parameter; the opening quote is consumed.
    fn scan_quoted(
        &mut self,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> NotationResult<String> {
        let mut value = String::new();

        loop {
            match self.next_char() {
                None => {
                    return Err(NotationError::new(
                        "unterminated quoted parameter",
                        self.span_from(start, start_line, start_col),
                        &self.input[start..],
                    ));
                }
                Some('\'') => {
                    if self.peek_char() == Some('\'') {
                        self.next_char();
                        value.push('\'');
                    } else {
                        break;
                    }
                }
                Some(c) => value.push(c),
            }
        }

        Ok(value)
    }
}
