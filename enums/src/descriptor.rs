//! Derived name/value data for one enumeration.

use ward_convert::{integer_width, IntegerWidth};
use ward_core::DataKind;

use crate::definition::EnumDefinition;
use crate::error::EnumResult;

/// The examined form of an enumeration: canonical name/value pairs, the
/// underlying width, flags mode and the combined flag mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: String,
    underlying: DataKind,
    width: IntegerWidth,
    is_flags: bool,
    /// Values in declaration order, as declared. Width normalization happens
    /// in `accepts`.
    values: Vec<(String, i128)>,
    flag_mask: u64,
}

impl EnumDescriptor {
    /// Examine a definition. With `include_all` false, hidden members are
    /// left out of both the value table and the flag mask.
    pub fn examine(definition: &EnumDefinition, include_all: bool) -> EnumResult<Self> {
        definition.check()?;
        let members = definition
            .members
            .iter()
            .filter(|m| include_all || !m.hidden)
            .map(|m| (m.name.clone(), m.value));
        Self::build(
            definition.name.clone(),
            definition.underlying,
            definition.flags,
            members,
        )
    }

    /// Examine an explicit caller-supplied `{name: value}` table.
    pub fn from_table<I, S>(
        name: impl Into<String>,
        underlying: DataKind,
        flags: bool,
        table: I,
    ) -> EnumResult<Self>
    where
        I: IntoIterator<Item = (S, i128)>,
        S: Into<String>,
    {
        let mut definition = EnumDefinition::new(name, underlying);
        definition.flags = flags;
        for (member, value) in table {
            definition = definition.member(member, value);
        }
        Self::examine(&definition, true)
    }

    fn build(
        name: String,
        underlying: DataKind,
        is_flags: bool,
        members: impl Iterator<Item = (String, i128)>,
    ) -> EnumResult<Self> {
        // check() already rejected non-integer kinds.
        let width = integer_width(underlying).unwrap_or(IntegerWidth::new(32, true));
        let values: Vec<(String, i128)> = members.collect();
        let flag_mask = if is_flags {
            values
                .iter()
                .fold(0u64, |mask, (_, v)| mask | width.to_bits(*v))
        } else {
            0
        };
        Ok(Self {
            name,
            underlying,
            width,
            is_flags,
            values,
            flag_mask,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn underlying(&self) -> DataKind {
        self.underlying
    }

    pub fn width(&self) -> IntegerWidth {
        self.width
    }

    pub fn is_flags(&self) -> bool {
        self.is_flags
    }

    /// OR of every examined value; zero outside flags mode.
    pub fn flag_mask(&self) -> u64 {
        self.flag_mask
    }

    /// Name/value pairs in declaration order.
    pub fn values(&self) -> &[(String, i128)] {
        &self.values
    }

    pub fn value_of(&self, name: &str) -> Option<i128> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Membership test shared by every enum-backed constraint.
    ///
    /// The candidate is first normalized to the underlying width; anything
    /// outside both the signed and unsigned reading of the width is rejected.
    /// Flags mode accepts when every set bit is also set in the mask.
    /// Otherwise the normalized value must equal one of the members.
    pub fn accepts(&self, value: i128) -> bool {
        let lowest = -(1i128 << (self.width.bits - 1));
        let highest = (1i128 << self.width.bits) - 1;
        if !(lowest..=highest).contains(&value) {
            return false;
        }
        let bits = self.width.to_bits(value);
        if self.is_flags {
            (bits ^ self.flag_mask) & bits == 0
        } else {
            self.values
                .iter()
                .any(|(_, v)| self.width.to_bits(*v) == bits)
        }
    }
}
