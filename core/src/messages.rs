//! Message lookup for validation results.
//!
//! Text is resolved through a `MessageProvider` so hosts can localize it.
//! Templates use positional placeholders (`{0}`, `{1}`, ...). Messages never
//! drive control flow.

use crate::ErrorId;
use std::borrow::Cow;
use std::fmt::Display;

/// Resolves a symbolic error identifier to a message template.
pub trait MessageProvider: Send + Sync {
    fn lookup(&self, id: ErrorId) -> Cow<'static, str>;
}

/// Built-in English (invariant) messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl MessageProvider for DefaultMessages {
    fn lookup(&self, id: ErrorId) -> Cow<'static, str> {
        let template = match id {
            ErrorId::ValueRequired => "{0} is required.",
            ErrorId::TooShort => "{0} must be at least {1} characters long.",
            ErrorId::TooLong => "{0} must be at most {1} characters long.",
            ErrorId::NotUpperCase => "{0} must be upper case.",
            ErrorId::NotLowerCase => "{0} must be lower case.",
            ErrorId::PatternMismatch => "{0} does not match the pattern '{1}'.",
            ErrorId::OutOfRange => "{0} must be between {1} and {2}.",
            ErrorId::NotEnumMember => "{0} is not a defined value of {1}.",
            ErrorId::InvalidFlags => "{0} contains flags not defined by {1}.",
            other => return Cow::Owned(format!("{} ({{0}})", other.symbol())),
        };
        Cow::Borrowed(template)
    }
}

/// Substitute positional placeholders in `template`.
///
/// Placeholders without a matching argument are left untouched.
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg.to_string(), close))
        });
        match substituted {
            Some((text, close)) => {
                out.push_str(&text);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
