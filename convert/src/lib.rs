//! Ward Convert
//!
//! Bidirectional, culture-invariant conversion between the canonical text
//! form of a value and its typed `Value`, for every data kind.
//!
//! Responsibilities:
//! - `format`: typed value to canonical text
//! - `parse`: canonical text to typed value, rejecting malformed or
//!   out-of-range input
//! - Integer classification and width mapping used by range and flag logic
//! - The enum-value sub-grammar (decimal or `0x` hexadecimal)
//!
//! For every representable value `v` of a kind,
//! `parse(&format(&v, kind)?, kind)? == v`.

mod format;
mod parse;
mod timespan;
mod width;

pub use format::format;
pub use parse::{parse, parse_enum_value};
pub use timespan::{format_timespan, parse_timespan};
pub use width::{integer_value, integer_width, is_integer_kind, IntegerWidth};
