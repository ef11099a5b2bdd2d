//! Symbolic error identifiers and the numeric error-code facility.
//!
//! Every failure site, whether a configuration error or a validation result,
//! is named by an `ErrorId`. `make_code` turns the identifier into a stable
//! 32-bit code: the facility number in the high half, the identifier in the
//! low half.

use std::fmt;

/// Facility number stamped into the high 16 bits of every code.
pub const FACILITY: u32 = 0x0057;

/// Symbolic identifier of a failure site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorId {
    // Configuration errors
    NoneKind = 0x0001,
    NullArgument = 0x0002,
    EmptyArgument = 0x0003,
    ArgumentOutOfRange = 0x0004,
    TooFewParameters = 0x0005,
    TooManyParameters = 0x0006,
    MalformedParameter = 0x0007,
    InvalidPattern = 0x0008,
    UnknownConstraint = 0x0009,
    DisallowedKind = 0x000A,
    NullValue = 0x000B,
    UnknownStateKey = 0x000C,
    NotationSyntax = 0x000D,
    ValueKindMismatch = 0x000E,

    // Validation results
    ValueRequired = 0x0101,
    TooShort = 0x0102,
    TooLong = 0x0103,
    NotUpperCase = 0x0104,
    NotLowerCase = 0x0105,
    PatternMismatch = 0x0106,
    OutOfRange = 0x0107,
    NotEnumMember = 0x0108,
    InvalidFlags = 0x0109,
}

impl ErrorId {
    /// Symbolic name used for message lookup and diagnostics.
    pub const fn symbol(self) -> &'static str {
        match self {
            ErrorId::NoneKind => "NoneKind",
            ErrorId::NullArgument => "NullArgument",
            ErrorId::EmptyArgument => "EmptyArgument",
            ErrorId::ArgumentOutOfRange => "ArgumentOutOfRange",
            ErrorId::TooFewParameters => "TooFewParameters",
            ErrorId::TooManyParameters => "TooManyParameters",
            ErrorId::MalformedParameter => "MalformedParameter",
            ErrorId::InvalidPattern => "InvalidPattern",
            ErrorId::UnknownConstraint => "UnknownConstraint",
            ErrorId::DisallowedKind => "DisallowedKind",
            ErrorId::NullValue => "NullValue",
            ErrorId::UnknownStateKey => "UnknownStateKey",
            ErrorId::NotationSyntax => "NotationSyntax",
            ErrorId::ValueKindMismatch => "ValueKindMismatch",
            ErrorId::ValueRequired => "ValueRequired",
            ErrorId::TooShort => "TooShort",
            ErrorId::TooLong => "TooLong",
            ErrorId::NotUpperCase => "NotUpperCase",
            ErrorId::NotLowerCase => "NotLowerCase",
            ErrorId::PatternMismatch => "PatternMismatch",
            ErrorId::OutOfRange => "OutOfRange",
            ErrorId::NotEnumMember => "NotEnumMember",
            ErrorId::InvalidFlags => "InvalidFlags",
        }
    }

    /// Returns true for identifiers of data-validation outcomes.
    pub const fn is_validation(self) -> bool {
        (self as u16) >= 0x0100
    }

    /// The stable numeric code for this identifier.
    pub const fn code(self) -> u32 {
        make_code(self)
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Map a symbolic failure site to its stable numeric code.
pub const fn make_code(id: ErrorId) -> u32 {
    (FACILITY << 16) | (id as u16 as u32)
}
