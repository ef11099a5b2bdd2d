//! Enum definitions: the raw source an `EnumDescriptor` is derived from.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ward_convert::integer_width;
use ward_core::DataKind;

use crate::error::{EnumError, EnumResult};

/// One named member of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    /// Member value; written in JSON as a string in the enum-value
    /// sub-grammar (decimal or `0x` hex).
    #[serde(with = "value_text")]
    pub value: i128,
    /// Hidden members (aliases, obsolete values) are only examined when all
    /// members are requested.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

/// An enumeration type known by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDefinition {
    /// Fully qualified type identifier, e.g. `Contoso.Access`.
    pub name: String,
    /// Underlying integer kind.
    #[serde(default = "default_underlying")]
    pub underlying: DataKind,
    /// Whether member values may be bitwise-combined.
    #[serde(default)]
    pub flags: bool,
    pub members: Vec<EnumMember>,
}

fn default_underlying() -> DataKind {
    DataKind::Int32
}

impl EnumDefinition {
    pub fn new(name: impl Into<String>, underlying: DataKind) -> Self {
        Self {
            name: name.into(),
            underlying,
            flags: false,
            members: Vec::new(),
        }
    }

    /// Mark this enumeration as a flags enumeration.
    pub fn flags(mut self) -> Self {
        self.flags = true;
        self
    }

    pub fn member(mut self, name: impl Into<String>, value: i128) -> Self {
        self.members.push(EnumMember {
            name: name.into(),
            value,
            hidden: false,
        });
        self
    }

    pub fn hidden_member(mut self, name: impl Into<String>, value: i128) -> Self {
        self.members.push(EnumMember {
            name: name.into(),
            value,
            hidden: true,
        });
        self
    }

    /// Check that the definition is well formed: non-empty name, integer
    /// underlying kind, unique member names that can be written as
    /// `Name=Value`, and values that fit the width.
    ///
    /// Values may be given in either the signed or unsigned reading of the
    /// width (`0xFF` and `-1` are both valid for an SByte enum).
    pub fn check(&self) -> EnumResult<()> {
        if self.name.is_empty() {
            return Err(EnumError::EmptyName);
        }
        let width = integer_width(self.underlying).ok_or_else(|| EnumError::NotIntegerKind {
            type_name: self.name.clone(),
            kind: self.underlying,
        })?;

        let lowest = -(1i128 << (width.bits - 1));
        let highest = (1i128 << width.bits) - 1;
        let mut seen = HashSet::new();
        for member in &self.members {
            if member.name.is_empty() || member.name.contains('=') {
                return Err(EnumError::InvalidMemberName {
                    type_name: self.name.clone(),
                    member: member.name.clone(),
                });
            }
            if !seen.insert(member.name.as_str()) {
                return Err(EnumError::duplicate_member(&self.name, &member.name));
            }
            if !(lowest..=highest).contains(&member.value) {
                return Err(EnumError::ValueOutOfRange {
                    type_name: self.name.clone(),
                    member: member.name.clone(),
                    value: member.value,
                    kind: self.underlying,
                });
            }
        }
        Ok(())
    }
}

/// Compile-time convenience for Rust enums that act as enumeration sources.
///
/// ```ignore
/// impl DescribeEnum for Access {
///     fn definition() -> EnumDefinition {
///         EnumDefinition::new("Access", DataKind::Byte)
///             .flags()
///             .member("Read", Access::Read as i128)
///             .member("Write", Access::Write as i128)
///     }
/// }
/// ```
pub trait DescribeEnum {
    fn definition() -> EnumDefinition;
}

mod value_text {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
        let text = String::deserialize(deserializer)?;
        ward_convert::parse_enum_value(&text).map_err(D::Error::custom)
    }
}
