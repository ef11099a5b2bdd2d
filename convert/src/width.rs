//! Integer kind classification and width mapping.

use ward_core::{DataKind, Value};

/// Bit width and signedness of a fixed-width integer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerWidth {
    pub bits: u32,
    pub signed: bool,
}

impl IntegerWidth {
    pub const fn new(bits: u32, signed: bool) -> Self {
        Self { bits, signed }
    }

    /// Smallest representable value.
    pub const fn min(self) -> i128 {
        if self.signed {
            -(1i128 << (self.bits - 1))
        } else {
            0
        }
    }

    /// Largest representable value.
    pub const fn max(self) -> i128 {
        if self.signed {
            (1i128 << (self.bits - 1)) - 1
        } else {
            (1i128 << self.bits) - 1
        }
    }

    pub fn contains(self, value: i128) -> bool {
        (self.min()..=self.max()).contains(&value)
    }

    /// All-ones mask covering this width.
    pub const fn mask(self) -> u64 {
        if self.bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.bits) - 1
        }
    }

    /// Two's-complement bit pattern of `value` truncated to this width.
    pub fn to_bits(self, value: i128) -> u64 {
        (value as u64) & self.mask()
    }

    /// The data kind with this width.
    pub const fn kind(self) -> DataKind {
        match (self.bits, self.signed) {
            (8, true) => DataKind::SByte,
            (8, false) => DataKind::Byte,
            (16, true) => DataKind::Int16,
            (16, false) => DataKind::UInt16,
            (32, true) => DataKind::Int32,
            (32, false) => DataKind::UInt32,
            (64, false) => DataKind::UInt64,
            _ => DataKind::Int64,
        }
    }
}

/// Returns true for the eight fixed-width integer kinds.
pub fn is_integer_kind(kind: DataKind) -> bool {
    integer_width(kind).is_some()
}

/// Map an integer kind to its host width.
pub fn integer_width(kind: DataKind) -> Option<IntegerWidth> {
    let width = match kind {
        DataKind::SByte => IntegerWidth::new(8, true),
        DataKind::Byte => IntegerWidth::new(8, false),
        DataKind::Int16 => IntegerWidth::new(16, true),
        DataKind::UInt16 => IntegerWidth::new(16, false),
        DataKind::Int32 => IntegerWidth::new(32, true),
        DataKind::UInt32 => IntegerWidth::new(32, false),
        DataKind::Int64 => IntegerWidth::new(64, true),
        DataKind::UInt64 => IntegerWidth::new(64, false),
        _ => return None,
    };
    Some(width)
}

/// Build an integer `Value` of `kind`, or `None` if `value` does not fit.
pub fn integer_value(value: i128, kind: DataKind) -> Option<Value> {
    let width = integer_width(kind)?;
    if !width.contains(value) {
        return None;
    }
    // In range for the width, so the narrowing casts below are exact.
    let v = match kind {
        DataKind::SByte => Value::SByte(value as i8),
        DataKind::Byte => Value::Byte(value as u8),
        DataKind::Int16 => Value::Int16(value as i16),
        DataKind::UInt16 => Value::UInt16(value as u16),
        DataKind::Int32 => Value::Int32(value as i32),
        DataKind::UInt32 => Value::UInt32(value as u32),
        DataKind::Int64 => Value::Int64(value as i64),
        _ => Value::UInt64(value as u64),
    };
    Some(v)
}
