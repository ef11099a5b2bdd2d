//! Ward Notation
//!
//! The bracketed constraint notation, e.g. `[MinLength(3)][Regex('[a-z]+')]`:
//!
//! ```text
//! ConstraintList := Constraint*
//! Constraint     := '[' Name ( '(' Param (',' Param)* ')' )? ']'
//! Name           := letter (letter | digit)*
//! Param          := QuotedString | BareToken
//! ```
//!
//! A quoted parameter is delimited by `'` and writes an embedded `'` as
//! `''`. A bare token runs up to the next `,`, `)` or `]` and is kept
//! verbatim. `serialize` quotes exactly the parameters that need it, so
//! `parse(serialize(c))` reproduces every constraint's parameters.

mod ast;
mod error;
mod lexer;
mod parser;
mod serializer;

pub use ast::{ConstraintNode, Span};
pub use error::{NotationError, NotationResult};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse, parse_nodes, Parser};
pub use serializer::{needs_quotes, quote_param, serialize, serialize_node, serialize_one};
