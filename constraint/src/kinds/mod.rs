//! Built-in constraint kinds.

mod case;
mod enums;
mod length;
mod range;
mod regex;
mod required;

pub use case::{LowerCaseConstraint, UpperCaseConstraint};
pub use enums::{EnumConstraint, TypeConstraint};
pub use length::{MaxLengthConstraint, MinLengthConstraint};
pub use range::RangeConstraint;
pub use regex::RegexConstraint;
pub use required::RequiredConstraint;

use ward_core::DataKind;

/// Kinds with a measurable length.
pub(crate) const LENGTH_KINDS: &[DataKind] = &[
    DataKind::String,
    DataKind::Xml,
    DataKind::Uri,
    DataKind::ByteArray,
];

/// Integer kinds plus `Enum`: the kinds enum membership applies to.
pub(crate) const ENUM_KINDS: &[DataKind] = &[
    DataKind::SByte,
    DataKind::Byte,
    DataKind::Int16,
    DataKind::UInt16,
    DataKind::Int32,
    DataKind::UInt32,
    DataKind::Int64,
    DataKind::UInt64,
    DataKind::Enum,
];
